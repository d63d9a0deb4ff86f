//! Configuration module for DonutDo.
//!
//! Configuration comes from environment variables; the CLI flags parsed
//! in `main` override whatever the environment provides.
//!
//! # Environment Variables
//!
//! | Variable | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `DONUTDO_TICK_RATE_MS` | No | 60 | Render tick interval in milliseconds |
//! | `DONUTDO_ASCII` | No | unset | Any value forces the ASCII symbol set |
//! | `DONUTDO_LOG` | No | unset | Path of a log file; logging is off without it |
//!
//! # Example
//!
//! ```
//! use donutdo::config::Config;
//!
//! let config = Config::from_env().expect("failed to load configuration");
//! assert!(config.tick_rate_ms > 0);
//! ```

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Default render tick interval (~16 FPS).
pub const DEFAULT_TICK_RATE_MS: u64 = 60;

/// Errors that can occur during configuration parsing.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Runtime configuration for DonutDo.
#[derive(Debug, Clone)]
pub struct Config {
    /// Render tick interval in milliseconds. Must be positive.
    pub tick_rate_ms: u64,

    /// Force the ASCII symbol set regardless of terminal detection.
    pub force_ascii: bool,

    /// Log file path. `None` disables logging entirely; the TUI owns
    /// stdout, so logs never go to the terminal.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            force_ascii: false,
            log_file: None,
        }
    }
}

impl Config {
    /// Creates a new `Config` by parsing environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `DONUTDO_TICK_RATE_MS` is set but is
    /// not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let tick_rate_ms = match env::var("DONUTDO_TICK_RATE_MS") {
            Ok(val) => {
                let ms = val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    key: "DONUTDO_TICK_RATE_MS".to_string(),
                    message: "expected positive integer".to_string(),
                })?;
                if ms == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "DONUTDO_TICK_RATE_MS".to_string(),
                        message: "tick rate must be greater than zero".to_string(),
                    });
                }
                ms
            }
            Err(_) => DEFAULT_TICK_RATE_MS,
        };

        let force_ascii = env::var("DONUTDO_ASCII").is_ok();

        let log_file = env::var("DONUTDO_LOG").ok().map(PathBuf::from);

        Ok(Self {
            tick_rate_ms,
            force_ascii,
            log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("DONUTDO_TICK_RATE_MS");
        env::remove_var("DONUTDO_ASCII");
        env::remove_var("DONUTDO_LOG");
    }

    #[test]
    #[serial]
    fn defaults_when_nothing_is_set() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert!(!config.force_ascii);
        assert!(config.log_file.is_none());
    }

    #[test]
    #[serial]
    fn tick_rate_is_parsed() {
        clear_env();
        env::set_var("DONUTDO_TICK_RATE_MS", "120");
        let config = Config::from_env().unwrap();
        assert_eq!(config.tick_rate_ms, 120);
        clear_env();
    }

    #[test]
    #[serial]
    fn tick_rate_rejects_garbage() {
        clear_env();
        env::set_var("DONUTDO_TICK_RATE_MS", "fast");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("DONUTDO_TICK_RATE_MS"));
        clear_env();
    }

    #[test]
    #[serial]
    fn tick_rate_rejects_zero() {
        clear_env();
        env::set_var("DONUTDO_TICK_RATE_MS", "0");
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn ascii_flag_is_presence_only() {
        clear_env();
        env::set_var("DONUTDO_ASCII", "1");
        assert!(Config::from_env().unwrap().force_ascii);
        clear_env();
    }

    #[test]
    #[serial]
    fn log_file_is_picked_up() {
        clear_env();
        env::set_var("DONUTDO_LOG", "/tmp/donutdo.log");
        let config = Config::from_env().unwrap();
        assert_eq!(config.log_file.as_deref(), Some("/tmp/donutdo.log".as_ref()));
        clear_env();
    }
}
