//! Mode-specific key handling
//!
//! Every key event goes through the key filter first. Only events the filter
//! leaves unhandled reach the handler for the current mode.

use crate::app::{App, Mode};
use crate::config::Action;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

/// Handle a key event for the popover
pub fn handle_key_event(app: &mut App, key: &KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    let filter = app.key_filter();
    if filter.intercept(app, key).is_handled() {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key.code, key.modifiers),
        Mode::ModelMenu { .. } => handle_model_menu_mode(app, key.code),
        Mode::NewModelPrompt => handle_new_model_prompt_mode(app, key.code, key.modifiers),
        Mode::Help => app.exit_mode(),
    }
}

fn handle_normal_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let Some(action) = app.config.keys.action_for(code, modifiers) else {
        return;
    };
    debug!(?action, "Normal mode action");
    app.clear_status();

    match action {
        Action::NextShortcut => app.select_next_shortcut(),
        Action::PrevShortcut => app.select_prev_shortcut(),
        Action::ClearSelection => app.clear_selection(),
        Action::ModelMenu => app.open_model_menu(),
        Action::NewModel => app.start_new_model_prompt(),
        Action::ResetContext => app.reset_context(),
        Action::Help => app.enter_mode(Mode::Help),
        Action::Quit => app.quit(),
    }
}

fn handle_model_menu_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.model_menu_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.model_menu_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm_model_menu(),
        KeyCode::Char('n') => app.start_new_model_prompt(),
        KeyCode::Esc | KeyCode::Tab | KeyCode::Char('m' | 'q') => app.exit_mode(),
        _ => {}
    }
}

fn handle_new_model_prompt_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Enter, _) => {
            app.submit_new_model();
        }
        (KeyCode::Esc, _) => app.cancel_new_model_prompt(),
        (KeyCode::Char('u'), mods) if mods.contains(KeyModifiers::CONTROL) => app.name_field.clear(),
        (KeyCode::Char(_), mods)
            if mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
        (KeyCode::Char(c), _) => app.name_field.insert(c),
        (KeyCode::Backspace, _) => app.name_field.erase_back(),
        (KeyCode::Delete, _) => app.name_field.erase_forward(),
        (KeyCode::Left, _) => app.name_field.move_left(),
        (KeyCode::Right, _) => app.name_field.move_right(),
        (KeyCode::Home, _) => app.name_field.move_to_start(),
        (KeyCode::End, _) => app.name_field.move_to_end(),
        _ => {}
    }
}
