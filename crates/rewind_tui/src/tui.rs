//! Interactive terminal session.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{debug, error, info, instrument, warn};

use crate::app::App;
use crate::config::TuiConfig;
use crate::{input, ui};

/// Puts the terminal back in cooked mode on the main screen when dropped.
///
/// Held for the whole session, so early returns and unwinding panics both
/// restore the terminal.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = restore(&mut io::stdout()) {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode, then the alternate screen, and shows the cursor.
fn restore(out: &mut impl Write) -> io::Result<()> {
    let raw = disable_raw_mode();
    leave_screen(out)?;
    raw
}

fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

/// Restores the terminal before the default hook prints the panic message,
/// so the message lands on the main screen.
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = restore(&mut io::stdout());
        hook(panic);
    }));
}

/// Runs the game until the player quits.
///
/// Logging must already be initialised; see [`crate::logging::init_file`].
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting Rewind TUI");

    install_panic_hook();
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(*config.show_help());
    let res = run_app(&mut terminal, app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Rewind TUI exited");
    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = input::action_for(key.code, app.focus())
            && !app.handle(action)
        {
            info!("User quit");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_screen_restores_main_screen_and_cursor() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }
}
