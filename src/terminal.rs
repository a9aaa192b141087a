//! Raw mode and alternate screen setup, undone on drop.

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::error;

/// Runs `restore` when dropped, so every exit path after setup undoes it.
pub struct TerminalGuard<F: FnMut() -> io::Result<()>> {
    restore: F,
}

impl<F: FnMut() -> io::Result<()>> TerminalGuard<F> {
    pub fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            error!("restoring terminal: {}", e);
        }
    }
}

/// Enable raw mode and switch to the alternate screen.
///
/// The guard exists as soon as raw mode is on, so a failure while entering
/// the alternate screen still restores the terminal.
pub fn enter() -> Result<TerminalGuard<impl FnMut() -> io::Result<()>>> {
    enable_raw_mode().context("Enabling raw mode")?;
    let guard = TerminalGuard::new(restore);
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .context("Entering alternate screen")?;
    Ok(guard)
}

/// Every step runs even if an earlier one fails; the first error is returned.
pub fn restore() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}
