//! DonutDo - a to-do list with a doughnut chart.
//!
//! A terminal to-do list that charts its own completion: tasks live in a
//! sorted store (incomplete before completed), and a doughnut ring plus
//! a growing-flower overlay track the completion percentage as tasks are
//! added and toggled.
//!
//! # Modules
//!
//! - [`tasks`]: the task store, sorting, and chart-data derivation
//! - [`tui`]: the ratatui interface (state, widgets, event pump)
//! - [`config`]: environment-variable configuration
//! - [`error`]: shared error types

pub mod config;
pub mod error;
pub mod tasks;
pub mod tui;

pub use config::Config;
pub use error::{AppError, Result};
pub use tasks::{ChartData, ProgressStage, Task, TaskList};
