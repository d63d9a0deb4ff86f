//! Reusable TUI widget components for DonutDo.
//!
//! Custom widgets built on top of [`ratatui`], each implementing the
//! [`Widget`](ratatui::widgets::Widget) trait. Every widget is rebuilt
//! from the application state each frame; none of them hold state of
//! their own.
//!
//! # Widget Catalog
//!
//! - [`input_field`]: the add-task text input
//! - [`task_list`]: checkbox rows projected from the sorted store
//! - [`donut`]: the two-segment progress ring with its centered overlay
//! - [`progress_art`]: threshold-keyed art frames for the ring cutout
//! - [`stats_footer`]: done/todo counts and the completion percentage
//!
//! # Design Principles
//!
//! - Widgets are stateless; state lives in [`AppState`](crate::tui::app::AppState)
//! - Each widget handles its own layout within its allocated area
//! - Styling flows in through a borrowed [`Theme`](crate::tui::app::Theme)
//! - Every widget degrades gracefully when its area is too small

pub mod donut;
pub mod input_field;
pub mod progress_art;
pub mod stats_footer;
pub mod task_list;

pub use donut::DonutWidget;
pub use input_field::{InputFieldWidget, INPUT_FIELD_HEIGHT};
pub use progress_art::{frame, ArtVariant, ProgressArtWidget};
pub use stats_footer::{StatsFooterWidget, STATS_FOOTER_HEIGHT};
pub use task_list::TaskListWidget;
