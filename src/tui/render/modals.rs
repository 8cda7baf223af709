//! Overlays drawn on top of the popover

use super::{centered_rect_fixed, colors, framed};
use crate::app::App;
use crate::config::Action;
use std::ops::Range;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

/// Label of the trailing model menu row
const NEW_MODEL_LABEL: &str = "New Model\u{2026}";

const NAME_PLACEHOLDER: &str = "Model Name (e.g. Mistral)";

const fn fg(color: Color) -> Style {
    Style::new().fg(color)
}

const fn bold(color: Color) -> Style {
    fg(color).add_modifier(Modifier::BOLD)
}

/// Height of a bordered overlay holding `lines`
fn framed_height(lines: &[Line<'_>]) -> u16 {
    u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

fn draw_overlay(frame: &mut Frame<'_>, area: Rect, paragraph: Paragraph<'_>) {
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Most model rows the dropdown shows at once
const MAX_MENU_ROWS: usize = 8;

/// Rows of dropdown chrome around the model rows: borders, divider and
/// the "New Model…" row
const MENU_CHROME_ROWS: u16 = 4;

/// Model rows to show so that `cursor` stays on screen
///
/// A cursor past the last model (the "New Model…" row) keeps the tail of
/// the list in view.
fn menu_window(total: usize, cursor: usize, visible: usize) -> Range<usize> {
    if total <= visible {
        return 0..total;
    }
    let anchor = cursor.min(total - 1);
    let start = (anchor + 1).saturating_sub(visible);
    start..start + visible
}

/// Divider line, or a count of hidden models when the list is scrolled
fn menu_divider(width: u16, above: usize, below: usize) -> Line<'static> {
    let text = match (above > 0, below > 0) {
        (true, true) => format!("\u{2191}{above} more above, \u{2193}{below} more below"),
        (true, false) => format!("\u{2191}{above} more above"),
        (false, true) => format!("\u{2193}{below} more below"),
        (false, false) => {
            return Line::styled(
                "\u{2500}".repeat(usize::from(width.saturating_sub(6))),
                fg(colors::DIVIDER),
            );
        }
    };
    Line::styled(format!("  {text}"), fg(colors::TEXT_MUTED))
}

/// Render the model dropdown just below the model line of the popover
///
/// Model rows scroll with the cursor; the "New Model…" row is always shown.
pub fn render_model_menu(frame: &mut Frame<'_>, app: &App, popover: Rect, cursor: usize) {
    let known = app.models.known();
    let current = app.models.current_index();

    // Hangs off the model line, inset from the popover border
    let y = popover.y.saturating_add(2);
    let room = frame
        .area()
        .bottom()
        .saturating_sub(y)
        .saturating_sub(MENU_CHROME_ROWS);
    let window = menu_window(known.len(), cursor, MAX_MENU_ROWS.min(usize::from(room)));

    let above = window.start;
    let below = known.len() - window.end;
    let rows = known
        .iter()
        .enumerate()
        .skip(window.start)
        .take(window.len())
        .map(|(idx, model)| {
            let check = if idx == current { '\u{2713}' } else { ' ' };
            menu_row(format!("{check} {model}"), idx == cursor)
        });
    let divider = menu_divider(popover.width, above, below);
    let new_model = menu_row(format!("  {NEW_MODEL_LABEL}"), cursor >= known.len());
    let lines: Vec<Line<'_>> = rows.chain([divider, new_model]).collect();

    let area = Rect {
        x: popover.x.saturating_add(2),
        y,
        width: popover.width.saturating_sub(4),
        height: framed_height(&lines).min(frame.area().bottom().saturating_sub(y)),
    };

    draw_overlay(frame, area, Paragraph::new(lines).block(framed(None)));
}

fn menu_row(text: String, highlighted: bool) -> Line<'static> {
    let style = if highlighted {
        bold(colors::TEXT_PRIMARY).bg(colors::SURFACE_HIGHLIGHT)
    } else {
        fg(colors::TEXT_PRIMARY)
    };
    Line::styled(text, style)
}

/// Render the "Add New Model" prompt
pub fn render_new_model_prompt(frame: &mut Frame<'_>, app: &App, popover: Rect) {
    let field = if app.name_field.text().is_empty() {
        Line::from(vec![
            Span::styled("\u{2502}", fg(colors::TEXT_PRIMARY)),
            Span::styled(NAME_PLACEHOLDER, fg(colors::TEXT_MUTED)),
        ])
    } else {
        let (before, after) = app.name_field.split_at_cursor();
        Line::styled(format!("{before}\u{2502}{after}"), bold(colors::TEXT_PRIMARY))
    };

    // Add is shown disabled until there is something to add
    let add_style = if app.can_submit_new_model() {
        bold(colors::ACCENT_POSITIVE)
    } else {
        fg(colors::TEXT_MUTED)
    };

    let lines = vec![
        Line::styled(
            "Enter the name of the local LLM model you'd like to use.",
            fg(colors::TEXT_DIM),
        ),
        Line::default(),
        field.style(Style::default().bg(colors::INPUT_BG)),
        Line::default(),
        Line::from(vec![
            Span::styled("Enter: Add", add_style),
            Span::styled("  \u{2022}  Esc: Cancel", fg(colors::TEXT_MUTED)),
        ]),
    ];

    let area = centered_rect_fixed(popover.width, 9, frame.area());
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(framed(Some("Add New Model")));
    draw_overlay(frame, area, paragraph);
}

/// Render the keybinding help overlay
pub fn render_help_overlay(frame: &mut Frame<'_>, app: &App) {
    let keys = &app.config.keys;
    let mut lines = vec![
        Line::styled("Keybindings", bold(colors::TEXT_PRIMARY)),
        Line::default(),
    ];

    let mut last_group = None;
    for action in Action::ALL {
        let group = action.group();
        if last_group != Some(group) {
            if last_group.is_some() {
                lines.push(Line::default());
            }
            lines.push(Line::styled(group.title(), fg(colors::TEXT_DIM)));
            last_group = Some(group);
        }
        lines.push(Line::styled(keys.help_line(action), fg(colors::TEXT_PRIMARY)));
    }

    lines.extend([
        Line::default(),
        Line::styled(app.config.chord_hint(), fg(colors::STAR)),
        Line::default(),
        Line::styled("Press any key to close", fg(colors::TEXT_MUTED)),
    ]);

    let area = centered_rect_fixed(app.config.popover_width, framed_height(&lines), frame.area());
    draw_overlay(frame, area, Paragraph::new(lines).block(framed(Some("Help"))));
}
