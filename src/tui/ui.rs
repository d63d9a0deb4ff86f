//! UI rendering for the DonutDo TUI.
//!
//! Composes the widgets into the full frame. The whole frame is rebuilt
//! from [`AppState`] on every draw; nothing is patched in place, so the
//! screen always reflects exactly what the store holds.
//!
//! # Layout
//!
//! ```text
//! ┌─ Add task ───────────┐┌─ Progress ───────────┐
//! │ water the plants_    ││       ███████        │
//! └──────────────────────┘│     ██       ██      │
//! ┌─ Tasks ──────────────┐│    ██  (@)    ██     │
//! │ [ ] call the bank    ││     ██       ██      │
//! │ [✓] buy milk         ││       ███████        │
//! │                      ││   ■ Done   ■ Todo    │
//! │                      │└──────────────────────┘
//! │                      │┌─ Summary ────────────┐
//! │                      ││ Done: 1  |  Todo: 1  │
//! └──────────────────────┘└──────────────────────┘
//!  Tab focus · Enter toggle · Esc quit
//! ```

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::AppState;
use crate::tui::widgets::{
    DonutWidget, InputFieldWidget, StatsFooterWidget, TaskListWidget, INPUT_FIELD_HEIGHT,
    STATS_FOOTER_HEIGHT,
};

/// Minimum terminal size below which a notice replaces the interface.
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 12;

/// Height of the key-hint line at the bottom of the frame.
const HINT_HEIGHT: u16 = 1;

/// Renders the full frame from the application state.
///
/// Terminals smaller than the minimum get a one-line notice instead of
/// a broken layout.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_size_notice(frame, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(HINT_HEIGHT)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_left_column(frame, state, columns[0]);
    render_right_column(frame, state, columns[1]);
    render_hints(frame, state, rows[1]);
}

/// Left column: the add-task input above the task list.
fn render_left_column(frame: &mut Frame, state: &AppState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(INPUT_FIELD_HEIGHT), Constraint::Min(0)])
        .split(area);

    let input = InputFieldWidget::new(
        &state.input,
        state.focus == crate::tui::app::Focus::Input,
        &state.theme,
    );
    frame.render_widget(input, rows[0]);

    let list = TaskListWidget::new(
        &state.tasks,
        state.selected,
        state.focus == crate::tui::app::Focus::List,
        &state.theme,
        &state.symbols,
    );
    frame.render_widget(list, rows[1]);
}

/// Right column: the doughnut chart above the stats footer.
fn render_right_column(frame: &mut Frame, state: &AppState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATS_FOOTER_HEIGHT)])
        .split(area);

    let data = state.tasks.chart_data();
    let donut = DonutWidget::new(data, state.tasks.progress_stage(), &state.theme, &state.symbols);
    frame.render_widget(donut, rows[0]);

    let footer = StatsFooterWidget::new(data, &state.theme);
    frame.render_widget(footer, rows[1]);
}

fn render_hints(frame: &mut Frame, state: &AppState, area: Rect) {
    let hints = Paragraph::new(" Tab focus · Enter toggle · Esc quit")
        .style(state.theme.text_muted);
    frame.render_widget(hints, area);
}

fn render_size_notice(frame: &mut Frame, area: Rect) {
    let notice = Paragraph::new(format!("Terminal too small (min {MIN_WIDTH}x{MIN_HEIGHT})"))
        .alignment(Alignment::Center);
    frame.render_widget(notice, area);
}
