//! Raw-mode terminal session for the interactive client.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::warn;

pub type AuthorTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the UI runs.
///
/// The screen is handed back on [`TerminalSession::close`], on drop, and on
/// panic, whichever comes first.
pub struct TerminalSession {
    terminal: AuthorTerminal,
    active: bool,
}

impl TerminalSession {
    /// Switch to raw mode on the alternate screen.
    ///
    /// A failure after raw mode is on turns it back off before returning.
    pub fn open() -> io::Result<Self> {
        enable_raw_mode()?;
        let terminal = undo_on_error(enter_screen(), restore)?;
        setup_panic_hook();
        Ok(Self {
            terminal,
            active: true,
        })
    }

    pub fn terminal(&mut self) -> &mut AuthorTerminal {
        &mut self.terminal
    }

    pub fn close(mut self) -> io::Result<()> {
        self.active = false;
        restore()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            if let Err(err) = restore() {
                warn!(error = %err, "failed to restore terminal");
            }
        }
    }
}

fn enter_screen() -> io::Result<AuthorTerminal> {
    io::stdout().execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Run `undo` when `result` is an error, keeping the original error.
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if result.is_err() {
        let _ = undo();
    }
    result
}

fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
