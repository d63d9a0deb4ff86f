//! Terminal setup and RAII restoration.
//!
//! [`Tui`] wraps a ratatui terminal: raw mode and the alternate screen
//! are entered on creation and restored on drop, so the shell comes back
//! intact however the application exits. [`install_panic_hook`] covers
//! the remaining gap — a panic that unwinds before the [`Drop`] handler
//! runs would otherwise leave the terminal raw and the message invisible.
//!
//! ```ignore
//! donutdo::tui::install_panic_hook();
//! let mut tui = donutdo::tui::Tui::new()?;
//! tui.draw(|frame| { /* render widgets */ })?;
//! // terminal restored when `tui` goes out of scope
//! ```

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::TuiError;

/// Installs a panic hook that restores the terminal before the panic
/// message is printed.
///
/// Call once at startup, before creating a [`Tui`]. The hook chains to
/// the previous handler after best-effort restoration; restoration
/// errors are ignored because the terminal may already be in a bad
/// state when a panic fires.
pub fn install_panic_hook() {
    let previous_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        previous_hook(panic_info);
    }));
}

/// RAII wrapper around the ratatui terminal.
///
/// Dropping the wrapper shows the cursor, leaves the alternate screen,
/// and disables raw mode. [`Tui::restore`] does the same explicitly and
/// propagates errors; the drop path stays silent to avoid panicking
/// during unwinding.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl Tui {
    /// Enters raw mode and the alternate screen and hides the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if any terminal initialization step fails; the
    /// steps that already succeeded are rolled back first.
    pub fn new() -> Result<Self, TuiError> {
        enable_raw_mode().map_err(TuiError::TerminalInit)?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(TuiError::TerminalInit(e));
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(e) => {
                let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(TuiError::TerminalInit(e));
            }
        };

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Draws one frame with the provided closure.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the frame to the terminal fails.
    pub fn draw<F>(&mut self, f: F) -> Result<(), TuiError>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f).map_err(TuiError::Render)?;
        Ok(())
    }

    /// Explicitly restores the terminal; subsequent drops are no-ops.
    ///
    /// # Errors
    ///
    /// Returns an error if a restoration step fails.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        execute!(io::stdout(), Show, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        // Errors are ignored: we may be unwinding, and a double panic
        // would abort the process.
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
