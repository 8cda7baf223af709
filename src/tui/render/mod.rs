//! TUI rendering
//!
//! - `colors`: Color palette definitions
//! - `popover`: the popover body (model line, reset button, shortcut list)
//! - `modals`: model menu, "Add New Model" prompt and help overlays

mod colors;
mod modals;
mod popover;

use crate::app::{App, Mode};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};

/// Rows the shortcut list always reserves, even when shorter
const MIN_LIST_ROWS: u16 = 6;

/// Fixed rows around the list: borders, model line, button, divider,
/// caption and status line
const CHROME_ROWS: u16 = 7;

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(colors::SURFACE)), area);

    let popover = popover_rect(app, area);
    popover::render_popover(frame, app, popover);

    match app.mode {
        Mode::Normal => {}
        Mode::ModelMenu { cursor } => modals::render_model_menu(frame, app, popover, cursor),
        Mode::NewModelPrompt => modals::render_new_model_prompt(frame, app, popover),
        Mode::Help => modals::render_help_overlay(frame, app),
    }
}

/// Where the popover sits inside `area`
#[must_use]
fn popover_rect(app: &App, area: Rect) -> Rect {
    let rows = u16::try_from(app.shortcuts.len())
        .unwrap_or(u16::MAX)
        .max(MIN_LIST_ROWS);
    let height = rows.saturating_add(CHROME_ROWS);
    centered_rect_fixed(app.config.popover_width, height, area)
}

/// Bordered block on the popover background, optionally titled
fn framed(title: Option<&str>) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::MODAL_BG));
    match title {
        Some(title) => block.title(format!(" {title} ")),
        None => block,
    }
}

/// Create a rect of fixed size centered in `area`, shrunk to fit
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
