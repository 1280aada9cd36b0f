//! Main event loop for the TUI.
//!
//! Everything is synchronous and single-threaded: the loop draws when state
//! changed, then blocks on terminal input with a short poll timeout so
//! status messages can expire.

use crate::app::App;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

use super::input::handle_key;
use super::render::render;

/// Poll timeout between input checks.
const TICK: Duration = Duration::from_millis(250);

/// Result of handling a key press event.
pub(super) enum Flow {
    Continue,
    Quit,
}

/// Runs the TUI event loop until the user quits.
///
/// # Panic Safety
///
/// Installs a panic hook that restores terminal state before unwinding,
/// ensuring the terminal is not left in raw mode on panic.
pub fn run(app: &mut App) -> Result<()> {
    // Install panic hook BEFORE setting up terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;

    loop {
        if app.needs_redraw {
            terminal.draw(|f| render(f, app))?;
            app.needs_redraw = false;
        }

        if app.clear_expired_status() {
            app.needs_redraw = true;
        }

        if !event::poll(TICK)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if let Flow::Quit = handle_key(app, key) {
                    break;
                }
            }
            Event::Resize(_, _) => app.needs_redraw = true,
            _ => {}
        }
    }

    restore_terminal(terminal)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
