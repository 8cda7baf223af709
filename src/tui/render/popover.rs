//! Popover body: model line, reset button, shortcut list, caption

use super::{colors, framed};
use crate::app::{App, Mode};
use crate::config::Action;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
};

/// Prefix drawn before the highlighted row
const HIGHLIGHT_SYMBOL: &str = "> ";

/// Star drawn at the end of starred rows
const STAR_SYMBOL: &str = "\u{2605}";

/// Render the popover into `area`
pub fn render_popover(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = framed(Some("Coach"));
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let [model_area, button_area, divider_area, list_area, caption_area, status_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

    render_model_line(frame, app, model_area);
    render_reset_button(frame, button_area);
    frame.render_widget(
        Paragraph::new("\u{2500}".repeat(usize::from(divider_area.width)))
            .style(Style::default().fg(colors::DIVIDER)),
        divider_area,
    );
    render_shortcut_list(frame, app, list_area);
    frame.render_widget(
        Paragraph::new(app.config.chord_hint())
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors::TEXT_MUTED)),
        caption_area,
    );
    render_status_line(frame, app, status_area);
}

fn render_model_line(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let open = matches!(app.mode, Mode::ModelMenu { .. });
    let arrow = if open { "\u{25b4}" } else { "\u{25be}" };

    let line = Line::from(vec![
        Span::styled("Model: ", Style::default().fg(colors::TEXT_DIM)),
        Span::styled(
            app.models.current(),
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {arrow}"), Style::default().fg(colors::TEXT_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_reset_button(frame: &mut Frame<'_>, area: Rect) {
    frame.render_widget(
        Paragraph::new("Reset Context")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(colors::TEXT_DIM)
                    .bg(colors::BUTTON_BG),
            ),
        area,
    );
}

fn render_shortcut_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if app.shortcuts.is_empty() {
        frame.render_widget(
            Paragraph::new("No shortcuts")
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors::TEXT_MUTED)),
            area,
        );
        return;
    }

    let prefix_width = HIGHLIGHT_SYMBOL.chars().count();
    let row_width = usize::from(area.width).saturating_sub(prefix_width);

    let items: Vec<ListItem<'_>> = app
        .shortcuts
        .iter()
        .map(|entry| {
            let name = Span::styled(
                entry.name.as_str(),
                Style::default().fg(colors::TEXT_PRIMARY),
            );
            if entry.is_starred {
                let pad = row_width.saturating_sub(name.width() + 1).max(1);
                ListItem::new(Line::from(vec![
                    name,
                    Span::raw(" ".repeat(pad)),
                    Span::styled(STAR_SYMBOL, Style::default().fg(colors::STAR)),
                ]))
            } else {
                ListItem::new(Line::from(name))
            }
        })
        .collect();

    let list = List::new(items)
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_style(
            Style::default()
                .bg(colors::SURFACE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(app.selected_index());
    frame.render_stateful_widget(list, area, &mut state);
}

/// Actions advertised on the idle status line
const HINT_ACTIONS: [(Action, &str); 3] = [
    (Action::ModelMenu, "model"),
    (Action::ResetContext, "reset"),
    (Action::Help, "help"),
];

/// `"m model • r reset • ? help"` for the current bindings
fn key_hint(app: &App) -> String {
    HINT_ACTIONS
        .iter()
        .filter_map(|&(action, label)| {
            app.config
                .keys
                .primary_key(action)
                .map(|key| format!("{key} {label}"))
        })
        .collect::<Vec<_>>()
        .join(" \u{2022} ")
}

fn render_status_line(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let line = app.status_message.as_deref().map_or_else(
        || {
            Line::from(Span::styled(
                key_hint(app),
                Style::default().fg(colors::TEXT_MUTED),
            ))
        },
        |message| {
            Line::from(Span::styled(
                message,
                Style::default().fg(colors::ACCENT_POSITIVE),
            ))
        },
    );
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
