//! Application state and event management for the DonutDo TUI.
//!
//! The main types are:
//!
//! - [`AppState`]: the owned application state (task list, input buffer,
//!   focus, selection) mutated only from the main event loop
//! - [`Focus`]: which control currently receives keyboard input
//! - [`TuiEvent`]: events that drive the TUI event loop
//! - [`EventHandler`]: async pump multiplexing terminal input, ticks,
//!   and shutdown via `tokio::select!`
//! - [`Theme`] / [`Symbols`]: styling and unicode/ASCII symbol sets
//!
//! # Architecture
//!
//! All mutation happens synchronously inside [`AppState::handle_key`] on
//! the single event-loop consumer: a key event mutates the task list,
//! the list re-sorts itself, and the next draw projects the sorted list,
//! recomputes the chart data, and redraws the donut. No partial state is
//! ever observable between those steps.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use tokio::sync::{mpsc, oneshot};

use crate::config::{Config, DEFAULT_TICK_RATE_MS};
use crate::tasks::TaskList;

// =============================================================================
// Focus and Application State
// =============================================================================

/// Control that currently receives keyboard input.
///
/// `Tab` cycles between the two; the add-task input has focus at
/// startup since an empty list has nothing to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The add-task text input.
    #[default]
    Input,
    /// The task list.
    List,
}

impl Focus {
    /// Switches to the other control.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Focus::Input => Focus::List,
            Focus::List => Focus::Input,
        }
    }
}

/// The owned application state.
///
/// Constructed once at startup and mutated only through key handling on
/// the event loop; every accessor observes the task list in its sorted
/// order.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The task store, kept sorted by its own invariant.
    pub tasks: TaskList,
    /// Current contents of the add-task input.
    pub input: String,
    /// Which control receives keyboard input.
    pub focus: Focus,
    /// Selected row in the (sorted) task list.
    pub selected: usize,
    /// Flag indicating the user requested exit.
    pub should_quit: bool,
    /// Theme configuration.
    pub theme: Theme,
    /// Symbol set (unicode or ASCII).
    pub symbols: Symbols,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tasks: TaskList::new(),
            input: String::new(),
            focus: Focus::default(),
            selected: 0,
            should_quit: false,
            theme: Theme::from_env(),
            symbols: Symbols::detect(),
        }
    }
}

impl AppState {
    /// Creates a new `AppState` with environment-detected theme and symbols.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `AppState`, honoring the configuration's overrides.
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        let mut state = Self::new();
        if config.force_ascii {
            state.symbols = ASCII_SYMBOLS;
        }
        state
    }

    /// Returns `true` if the application should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Signals that the application should quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Submits the input buffer as a new task.
    ///
    /// Blank input is discarded without feedback, matching the store's
    /// contract; the buffer is cleared either way.
    pub fn submit_input(&mut self) {
        if self.tasks.add(&self.input) {
            tracing::debug!(total = self.tasks.len(), "task added");
        }
        self.input.clear();
        self.clamp_selection();
    }

    /// Toggles the completion flag of the selected task.
    ///
    /// The index is positional against the sorted order the user is
    /// looking at; the store re-sorts before this returns, so the next
    /// draw (and the next toggle) see consistent indices.
    pub fn toggle_selected(&mut self) {
        if self.tasks.toggle(self.selected) {
            tracing::debug!(index = self.selected, "task toggled");
        }
        self.clamp_selection();
    }

    /// Moves the list selection down by one, clamped to the last task.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }

    /// Moves the list selection up by one, clamped to the first task.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.tasks.len() {
            self.selected = self.tasks.len() - 1;
        }
    }

    /// Processes one key event, mutating state accordingly.
    ///
    /// Global bindings (quit, focus switch) are handled first; the rest
    /// dispatch on the focused control.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl-C and Esc quit from anywhere.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }
        match key.code {
            KeyCode::Esc => {
                self.quit();
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            // Arrow down jumps to the list when there is something to select.
            KeyCode::Down if !self.tasks.is_empty() => {
                self.focus = Focus::List;
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            _ => {}
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Theme configuration for the TUI.
///
/// Covers the list, the input field, the donut chart segments, and the
/// stats footer. [`Theme::monochrome`] provides a modifier-only variant
/// for `NO_COLOR` environments.
#[derive(Debug, Clone)]
pub struct Theme {
    // Layout
    /// Style for unfocused borders.
    pub border: Style,
    /// Style for the border of the focused panel.
    pub border_focused: Style,
    /// Style for panel titles.
    pub title: Style,
    /// Style for primary text.
    pub text_primary: Style,
    /// Style for muted/deemphasized text.
    pub text_muted: Style,

    // Input
    /// Style for the input field when focused.
    pub input_focused: Style,
    /// Style for the input field when unfocused.
    pub input_unfocused: Style,

    // Task list
    /// Style for incomplete task rows.
    pub task_pending: Style,
    /// Style for completed task rows (the visual "completed" marker).
    pub task_completed: Style,
    /// Style applied on top of the selected row.
    pub selection: Style,

    // Donut chart
    /// Segment style for completed tasks (green in the default theme).
    pub donut_done: Style,
    /// Segment style for remaining tasks (yellow in the default theme).
    pub donut_todo: Style,
    /// Ring style when the list is empty.
    pub donut_empty: Style,

    // Stats footer
    /// Style for the done count.
    pub stat_done: Style,
    /// Style for the todo count.
    pub stat_todo: Style,
    /// Style for the percentage figure.
    pub stat_percent: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Cyan),
            title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            text_primary: Style::default(),
            text_muted: Style::default().fg(Color::DarkGray),

            input_focused: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            input_unfocused: Style::default().fg(Color::Gray),

            task_pending: Style::default(),
            task_completed: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            selection: Style::default().add_modifier(Modifier::REVERSED),

            donut_done: Style::default().fg(Color::Green),
            donut_todo: Style::default().fg(Color::Yellow),
            donut_empty: Style::default().fg(Color::DarkGray),

            stat_done: Style::default().fg(Color::Green),
            stat_todo: Style::default().fg(Color::Yellow),
            stat_percent: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Creates a monochrome theme using only modifiers, for terminals
    /// where color output is disabled per the `NO_COLOR` convention.
    #[must_use]
    pub fn monochrome() -> Self {
        Self {
            border: Style::default(),
            border_focused: Style::default().add_modifier(Modifier::BOLD),
            title: Style::default().add_modifier(Modifier::BOLD),
            text_primary: Style::default(),
            text_muted: Style::default().add_modifier(Modifier::DIM),

            input_focused: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            input_unfocused: Style::default().add_modifier(Modifier::DIM),

            task_pending: Style::default(),
            task_completed: Style::default()
                .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
            selection: Style::default().add_modifier(Modifier::REVERSED),

            donut_done: Style::default(),
            donut_todo: Style::default().add_modifier(Modifier::DIM),
            donut_empty: Style::default().add_modifier(Modifier::DIM),

            stat_done: Style::default().add_modifier(Modifier::BOLD),
            stat_todo: Style::default(),
            stat_percent: Style::default().add_modifier(Modifier::BOLD),
        }
    }

    /// Returns [`Theme::monochrome`] if `NO_COLOR` is set, the default
    /// theme otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        if std::env::var("NO_COLOR").is_ok() {
            Self::monochrome()
        } else {
            Self::default()
        }
    }
}

// =============================================================================
// Symbols
// =============================================================================

/// Symbol set for the TUI (unicode or ASCII).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    /// Checkbox mark for a completed task.
    pub checked: &'static str,
    /// Checkbox mark for an incomplete task.
    pub unchecked: &'static str,
    /// Block used to paint the donut ring.
    pub ring: &'static str,
    /// Legend swatch.
    pub swatch: &'static str,
    /// Arrow used for the selection cue and key hints.
    pub arrow: &'static str,
}

/// Unicode symbol set for modern terminals.
pub const UNICODE_SYMBOLS: Symbols = Symbols {
    checked: "✓",
    unchecked: " ",
    ring: "█",
    swatch: "■",
    arrow: "→",
};

/// ASCII symbol set for limited terminals.
pub const ASCII_SYMBOLS: Symbols = Symbols {
    checked: "x",
    unchecked: " ",
    ring: "#",
    swatch: "#",
    arrow: "->",
};

impl Symbols {
    /// Detects the appropriate symbol set from `TERM`.
    ///
    /// Linux console and VT100-class terminals get ASCII; everything
    /// else (including an unset `TERM`) gets unicode.
    #[must_use]
    pub fn detect() -> Self {
        if std::env::var("TERM")
            .map(|t| t.contains("linux") || t.contains("vt100"))
            .unwrap_or(false)
        {
            ASCII_SYMBOLS
        } else {
            UNICODE_SYMBOLS
        }
    }

    /// Whether this is the ASCII set.
    #[must_use]
    pub fn is_ascii(&self) -> bool {
        *self == ASCII_SYMBOLS
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::detect()
    }
}

// =============================================================================
// Events
// =============================================================================

/// Events that drive the TUI event loop.
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Periodic tick; every tick redraws the frame.
    Tick,
    /// Terminal key press.
    Key(KeyEvent),
    /// Terminal resize to (columns, rows).
    Resize(u16, u16),
}

/// Poll timeout for checking terminal input.
const POLL_TIMEOUT_MS: u64 = 10;

/// Pumps terminal input and periodic ticks into an MPSC channel.
///
/// Runs in its own tokio task. A `tokio::select!` with biased ordering
/// multiplexes three sources: the shutdown oneshot (checked first), the
/// tick interval, and crossterm polling moved onto the blocking pool so
/// the async runtime never stalls on terminal I/O.
#[derive(Debug)]
pub struct EventHandler {
    event_tx: mpsc::Sender<TuiEvent>,
    shutdown_rx: oneshot::Receiver<()>,
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new `EventHandler` with the default tick rate.
    pub fn new(event_tx: mpsc::Sender<TuiEvent>, shutdown_rx: oneshot::Receiver<()>) -> Self {
        Self::with_tick_rate(
            event_tx,
            shutdown_rx,
            Duration::from_millis(DEFAULT_TICK_RATE_MS),
        )
    }

    /// Creates a new `EventHandler` with a custom tick rate.
    pub fn with_tick_rate(
        event_tx: mpsc::Sender<TuiEvent>,
        shutdown_rx: oneshot::Receiver<()>,
        tick_rate: Duration,
    ) -> Self {
        Self {
            event_tx,
            shutdown_rx,
            tick_rate,
        }
    }

    /// Returns the configured tick rate.
    #[must_use]
    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Runs the pump until shutdown is signalled or the receiver drops.
    ///
    /// # Errors
    ///
    /// Returns an error if the blocking poll task panics; ordinary
    /// polling failures (no terminal available, as in CI) are treated
    /// as "no event".
    pub async fn run(mut self) -> std::io::Result<()> {
        let mut tick_interval = tokio::time::interval(self.tick_rate);
        // Burst avoids tick pile-up if a draw falls behind.
        tick_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Burst);
        tick_interval.tick().await; // intervals fire immediately once

        loop {
            tokio::select! {
                biased;

                _ = &mut self.shutdown_rx => {
                    tracing::debug!("event handler received shutdown signal");
                    break;
                }

                _ = tick_interval.tick() => {
                    if self.event_tx.send(TuiEvent::Tick).await.is_err() {
                        tracing::debug!("event receiver dropped, exiting event loop");
                        break;
                    }
                }

                result = tokio::task::spawn_blocking(|| {
                    Self::poll_terminal_event(Duration::from_millis(POLL_TIMEOUT_MS))
                }) => {
                    match result {
                        Ok(Some(event)) => {
                            if self.event_tx.send(event).await.is_err() {
                                tracing::debug!("event receiver dropped, exiting event loop");
                                break;
                            }
                        }
                        Ok(None) => {}
                        Err(join_error) => {
                            tracing::error!("terminal polling task panicked: {join_error}");
                            return Err(std::io::Error::other("terminal polling task panicked"));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Polls for one terminal event; `None` on timeout or when no
    /// terminal is available.
    fn poll_terminal_event(timeout: Duration) -> Option<TuiEvent> {
        match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(crossterm_event) => Self::convert_crossterm_event(crossterm_event),
                Err(e) => {
                    tracing::trace!("failed to read terminal event: {e}");
                    None
                }
            },
            Ok(false) => None,
            Err(e) => {
                tracing::trace!("failed to poll terminal: {e}");
                None
            }
        }
    }

    fn convert_crossterm_event(event: CrosstermEvent) -> Option<TuiEvent> {
        match event {
            CrosstermEvent::Key(key_event) => Some(TuiEvent::Key(key_event)),
            CrosstermEvent::Resize(cols, rows) => Some(TuiEvent::Resize(cols, rows)),
            // Mouse, focus, and paste events are not handled.
            _ => None,
        }
    }
}
