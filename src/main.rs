//! DonutDo - a to-do list with a doughnut chart.
//!
//! Runs the TUI: an add-task input and a task list on the left, the
//! doughnut chart and its summary on the right.
//!
//! # Environment Variables
//!
//! See the [`config`](donutdo::config) module for available options.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use donutdo::config::Config;
use donutdo::tui::{self, AppState, EventHandler, Tui, TuiEvent};

/// Capacity of the event channel between the pump and the main loop.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// DonutDo - a to-do list with a doughnut chart.
///
/// Tasks are added through the input field and toggled from the list;
/// the chart redraws from the store on every change.
#[derive(Parser, Debug)]
#[command(name = "donutdo")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
ENVIRONMENT VARIABLES:
    DONUTDO_TICK_RATE_MS  Render tick interval in ms (default: 60)
    DONUTDO_ASCII         Any value forces the ASCII symbol set
    DONUTDO_LOG           Log file path; logging is off without it
    NO_COLOR              Render without colors

KEYS:
    Tab        switch focus between input and list
    Enter      add the typed task / toggle the selected task
    Up/Down    move the list selection
    Esc        quit
")]
struct Cli {
    /// Force the ASCII symbol set.
    #[arg(long)]
    ascii: bool,

    /// Render tick interval in milliseconds.
    #[arg(long, value_name = "MS")]
    tick_rate: Option<u64>,

    /// Seed the list with a task (repeatable).
    #[arg(long, value_name = "TEXT")]
    task: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if cli.ascii {
        config.force_ascii = true;
    }
    if let Some(ms) = cli.tick_rate {
        anyhow::ensure!(ms > 0, "--tick-rate must be greater than zero");
        config.tick_rate_ms = ms;
    }

    init_logging(&config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    runtime.block_on(run_app(config, cli.task))
}

/// Runs the TUI until the user quits.
async fn run_app(config: Config, seed_tasks: Vec<String>) -> Result<()> {
    info!(tick_rate_ms = config.tick_rate_ms, "Starting DonutDo");

    let mut state = AppState::with_config(&config);
    for text in &seed_tasks {
        state.tasks.add(text);
    }

    let (event_tx, mut event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let handler = EventHandler::with_tick_rate(
        event_tx,
        shutdown_rx,
        Duration::from_millis(config.tick_rate_ms),
    );
    let pump = tokio::spawn(handler.run());

    tui::install_panic_hook();
    let mut terminal = Tui::new().context("Failed to initialize terminal")?;

    while let Some(event) = event_rx.recv().await {
        match event {
            TuiEvent::Tick => {
                terminal
                    .draw(|frame| tui::ui::render(frame, &state))
                    .context("Failed to draw frame")?;
            }
            TuiEvent::Key(key) => state.handle_key(key),
            // The next tick redraws into the resized buffer.
            TuiEvent::Resize(cols, rows) => {
                debug!(cols, rows, "terminal resized");
            }
        }

        if state.should_quit() {
            break;
        }
    }

    // Stop the pump before giving the terminal back.
    let _ = shutdown_tx.send(());
    let _ = pump.await;

    terminal
        .restore()
        .context("Failed to restore the terminal")?;

    info!(tasks = state.tasks.len(), "DonutDo stopped");
    Ok(())
}

/// Initializes logging to the configured file, if any.
///
/// The TUI owns the terminal, so without a log file logging stays off
/// entirely rather than corrupting the display.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .init();

    Ok(())
}
