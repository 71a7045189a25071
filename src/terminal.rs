//! Raw-mode terminal setup for the admin console.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type AdminTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal for the lifetime of the TUI and gives it back on drop,
/// including when the event loop bails out with an error.
pub struct TerminalSession {
    terminal: AdminTerminal,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        io::stdout().execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut AdminTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            tracing::error!(error = %e, "failed to restore terminal");
        }
    }
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        tracing::error!(%panic_info, "admin console panicked");
        original_hook(panic_info);
    }));
}
