//! Raw mode and alternate screen, entered for the lifetime of the TUI

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::{info, warn};

use crate::config::settings::Settings;
use crate::models::ReportPeriod;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back when dropped, on error paths too
struct ScreenGuard;

impl ScreenGuard {
    fn enter() -> Result<Self> {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = leave_screen();
            previous(info);
        }));

        enable_raw_mode()?;
        // From here on Drop restores raw mode even if the screen switch fails
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        if let Err(e) = leave_screen() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

fn leave_screen() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Run the interactive grid until the user quits
pub fn run_tui(settings: &Settings, period: ReportPeriod) -> Result<()> {
    let _guard = ScreenGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    info!(period = %period, "starting tui");

    let mut app = App::new(settings, period);
    let events = EventHandler::default();
    let result = event_loop(&mut terminal, &mut app, &events);

    info!("tui closed");
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        handle_event(app, events.next()?)?;
    }
    Ok(())
}
