//! Terminal User Interface for the coach popover

mod input;
mod render;

pub use input::handle_key_event;
pub use render::render;

use crate::app::{App, Event, EventSource};
use anyhow::{Context, Result};
use ratatui::crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, warn};

/// Run the TUI application until the user quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or restored
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();

    // Needed for the Super modifier to be reported at all
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    debug!(enhanced, "Keyboard enhancement");

    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventSource::from_config(&app.config);
    let result = run_loop(&mut terminal, &mut app, events);

    // Restore the terminal even if the loop failed
    if enhanced && let Err(e) = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags) {
        warn!("Failed to pop keyboard enhancement flags: {e}");
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: EventSource,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, &key),
            Event::Redraw | Event::Idle => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
