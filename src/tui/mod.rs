//! Terminal user interface for DonutDo.
//!
//! A TUI built with [`ratatui`] showing a to-do list next to a live
//! doughnut chart of completion progress. The interface has two focus
//! targets (the add-task input and the task list) and redraws the whole
//! frame from state on every tick.
//!
//! # Architecture
//!
//! - **App** (`app`): application state, key dispatch, and the async
//!   event pump (Model/Controller)
//! - **UI** (`ui`): layout and rendering (View)
//! - **Terminal** (`terminal`): raw-mode setup, teardown, and panic
//!   handling
//! - **Widgets** (`widgets`): the stateless components the UI composes

pub mod app;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use app::{AppState, EventHandler, Focus, Symbols, Theme, TuiEvent};
pub use terminal::{install_panic_hook, Tui};
