//! Error types for DonutDo.
//!
//! User-level failure modes in this application are deliberately silent
//! (blank input is discarded, undersized panels skip their draw), so the
//! error types here cover real failures only: configuration parsing,
//! terminal setup, and render I/O.

use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error for the DonutDo binary.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File system I/O error (log file, terminal handles).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TUI-related error.
    #[error("TUI error: {0}")]
    Tui(#[from] TuiError),
}

/// Errors that can occur while the terminal UI is running.
#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal initialization failed (raw mode, alternate screen).
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(#[source] std::io::Error),

    /// Drawing a frame failed.
    #[error("render error: {0}")]
    Render(#[source] std::io::Error),

    /// The event pump stopped unexpectedly.
    #[error("event error: {0}")]
    Event(String),
}

/// A specialized `Result` type for DonutDo operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "DONUTDO_TICK_RATE_MS".to_string(),
            message: "expected positive integer".to_string(),
        };
        let err = AppError::Config(err);
        assert_eq!(
            err.to_string(),
            "configuration error: invalid value for DONUTDO_TICK_RATE_MS: expected positive integer"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no tty");
        let err: AppError = io_err.into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn tui_error_terminal_init_display() {
        let io_err = std::io::Error::other("raw mode failed");
        let err = TuiError::TerminalInit(io_err);
        assert_eq!(
            err.to_string(),
            "failed to initialize terminal: raw mode failed"
        );
    }

    #[test]
    fn tui_error_render_display() {
        let io_err = std::io::Error::other("write failed");
        let err = TuiError::Render(io_err);
        assert_eq!(err.to_string(), "render error: write failed");
    }

    #[test]
    fn tui_error_event_display() {
        let err = TuiError::Event("channel closed".to_string());
        assert_eq!(err.to_string(), "event error: channel closed");
    }

    #[test]
    fn tui_error_to_app_error_conversion() {
        let tui_err = TuiError::Event("test".to_string());
        let err: AppError = tui_err.into();
        assert!(matches!(err, AppError::Tui(_)));
    }

    #[test]
    fn error_source_chain_is_preserved() {
        use std::error::Error;

        let io_err = std::io::Error::other("underlying");
        let err = TuiError::Render(io_err);
        assert!(err.source().is_some());
    }
}
