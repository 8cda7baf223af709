use super::*;
use crate::config::CommandModifier;
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Reset(String),
    Selected(String),
}

#[derive(Debug, Default, Clone)]
struct RecordingSession {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl ModelSession for RecordingSession {
    fn reset_context(&mut self, model: &str) {
        self.calls.borrow_mut().push(Call::Reset(model.to_string()));
    }

    fn model_selected(&mut self, model: &str) {
        self.calls
            .borrow_mut()
            .push(Call::Selected(model.to_string()));
    }
}

fn create_test_app() -> (App, Rc<RefCell<Vec<Call>>>) {
    let session = RecordingSession::default();
    let calls = Rc::clone(&session.calls);
    (App::new(Config::default(), Box::new(session)), calls)
}

fn names(app: &App) -> Vec<(String, bool)> {
    app.shortcuts
        .iter()
        .map(|e| (e.name.clone(), e.is_starred))
        .collect()
}

fn cmd(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SUPER)
}

#[test]
fn test_new_app_seeds() {
    let (app, _) = create_test_app();

    assert_eq!(
        names(&app),
        vec![
            ("Shift + Cmd + L".to_string(), false),
            ("Option + Space".to_string(), false),
        ]
    );
    assert_eq!(app.models.known(), ["Llama 3".to_string()]);
    assert_eq!(app.models.current(), "Llama 3");
    assert_eq!(app.selection, None);
    assert_eq!(app.mode, Mode::Normal);
}

#[test]
fn test_star_then_delete_scenario() {
    let (mut app, _) = create_test_app();
    let filter = app.key_filter();
    app.select_shortcut_at(0);

    assert!(filter.intercept(&mut app, &cmd('s')).is_handled());
    assert_eq!(
        names(&app),
        vec![
            ("Shift + Cmd + L".to_string(), true),
            ("Option + Space".to_string(), false),
        ]
    );

    assert!(filter.intercept(&mut app, &cmd('w')).is_handled());
    assert_eq!(names(&app), vec![("Option + Space".to_string(), false)]);
    assert_eq!(app.selection, None);
}

#[test]
fn test_add_model_scenario() {
    let (mut app, calls) = create_test_app();

    app.start_new_model_prompt();
    for c in "Mistral".chars() {
        app.name_field.insert(c);
    }
    assert!(app.submit_new_model());

    assert_eq!(
        app.models.known(),
        ["Llama 3".to_string(), "Mistral".to_string()]
    );
    assert_eq!(app.models.current(), "Mistral");
    assert_eq!(app.mode, Mode::Normal);
    assert!(app.name_field.text().is_empty());
    assert_eq!(*calls.borrow(), vec![Call::Selected("Mistral".to_string())]);
}

#[test]
fn test_submit_blank_model_keeps_prompt_open() {
    let (mut app, calls) = create_test_app();
    app.start_new_model_prompt();
    app.name_field.insert(' ');

    assert!(!app.can_submit_new_model());
    assert!(!app.submit_new_model());

    assert_eq!(app.mode, Mode::NewModelPrompt);
    assert_eq!(app.models.known(), ["Llama 3".to_string()]);
    assert_eq!(app.models.current(), "Llama 3");
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_cancel_prompt_clears_input_only() {
    let (mut app, _) = create_test_app();
    app.start_new_model_prompt();
    app.name_field.insert('x');

    app.cancel_new_model_prompt();

    assert_eq!(app.mode, Mode::Normal);
    assert!(app.name_field.text().is_empty());
    assert_eq!(app.models.len(), 1);
}

#[test]
fn test_prompt_starts_empty() {
    let (mut app, _) = create_test_app();
    app.start_new_model_prompt();
    for c in "stale".chars() {
        app.name_field.insert(c);
    }
    app.exit_mode();

    app.start_new_model_prompt();

    assert!(app.name_field.text().is_empty());
}

#[test]
fn test_reset_context_reports_current_model() {
    let (mut app, calls) = create_test_app();
    let before = names(&app);

    app.reset_context();

    assert_eq!(*calls.borrow(), vec![Call::Reset("Llama 3".to_string())]);
    assert_eq!(names(&app), before);
    assert_eq!(
        app.status_message.as_deref(),
        Some("Context reset for Llama 3")
    );
}

#[test]
fn test_model_menu_selects_model() {
    let config = Config {
        models: vec!["Llama 3".to_string(), "phi3".to_string()],
        ..Config::default()
    };
    let session = RecordingSession::default();
    let calls = Rc::clone(&session.calls);
    let mut app = App::new(config, Box::new(session));

    app.open_model_menu();
    assert_eq!(app.model_menu_cursor(), Some(0));

    app.model_menu_next();
    app.confirm_model_menu();

    assert_eq!(app.models.current(), "phi3");
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(*calls.borrow(), vec![Call::Selected("phi3".to_string())]);
}

#[test]
fn test_model_menu_trailing_row_opens_prompt() {
    let (mut app, _) = create_test_app();
    app.open_model_menu();

    // Up from the first row wraps to "New Model…"
    app.model_menu_prev();
    assert_eq!(app.model_menu_cursor(), Some(1));

    app.confirm_model_menu();
    assert_eq!(app.mode, Mode::NewModelPrompt);
}

#[test]
fn test_model_menu_opens_on_current() {
    let (mut app, _) = create_test_app();
    app.models.add("Mistral");
    app.models.add("phi3");
    app.select_model(1);

    app.open_model_menu();

    assert_eq!(app.model_menu_cursor(), Some(1));
}

#[test]
fn test_menu_navigation_outside_menu_is_noop() {
    let (mut app, _) = create_test_app();
    app.model_menu_next();
    app.confirm_model_menu();
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.model_menu_cursor(), None);
}

#[test]
fn test_select_next_and_prev_wrap() {
    let (mut app, _) = create_test_app();

    app.select_next_shortcut();
    assert_eq!(app.selected_index(), Some(0));
    app.select_next_shortcut();
    assert_eq!(app.selected_index(), Some(1));
    app.select_next_shortcut();
    assert_eq!(app.selected_index(), Some(0));
    app.select_prev_shortcut();
    assert_eq!(app.selected_index(), Some(1));

    app.clear_selection();
    app.select_prev_shortcut();
    assert_eq!(app.selected_index(), Some(1));
}

#[test]
fn test_navigation_on_empty_list() {
    let config = Config {
        shortcuts: Vec::new(),
        ..Config::default()
    };
    let mut app = App::with_logging_session(config);

    app.select_next_shortcut();
    assert_eq!(app.selection, None);
    app.select_prev_shortcut();
    assert_eq!(app.selection, None);
}

#[test]
fn test_select_out_of_range_clears_selection() {
    let (mut app, _) = create_test_app();
    app.select_shortcut_at(0);

    app.select_shortcut_at(app.shortcuts.len());

    assert_eq!(app.selection, None);
}

#[test]
fn test_dangling_selection_is_not_found() {
    let (mut app, _) = create_test_app();
    let first = app.shortcuts.as_slice()[0].id;
    app.selection = Some(first);
    app.shortcuts.remove(first);

    assert!(app.selected_shortcut().is_none());
    assert_eq!(app.selected_index(), None);
    assert_eq!(app.toggle_selected_star(), None);
    assert!(app.delete_selected().is_none());
    assert_eq!(app.shortcuts.len(), 1);
    assert_eq!(app.selection, None);
}

#[test]
fn test_delete_without_selection_is_noop() {
    let (mut app, _) = create_test_app();
    let before = app.shortcuts.clone();

    assert!(app.delete_selected().is_none());
    assert_eq!(app.shortcuts, before);
}

#[test]
fn test_filter_honors_configured_modifier() {
    let config = Config {
        command_modifiers: vec![CommandModifier::Alt],
        ..Config::default()
    };
    let mut app = App::with_logging_session(config);
    let filter = app.key_filter();
    app.select_shortcut_at(1);

    let ctrl_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
    assert!(!filter.intercept(&mut app, &ctrl_w).is_handled());
    assert_eq!(app.shortcuts.len(), 2);

    let alt_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::ALT);
    assert!(filter.intercept(&mut app, &alt_w).is_handled());
    assert_eq!(names(&app), vec![("Shift + Cmd + L".to_string(), false)]);
}

#[test]
fn test_status_message() {
    let (mut app, _) = create_test_app();
    app.set_status("hello");
    assert_eq!(app.status_message.as_deref(), Some("hello"));
    app.clear_status();
    assert!(app.status_message.is_none());
}

#[test]
fn test_quit() {
    let (mut app, _) = create_test_app();
    app.quit();
    assert!(app.should_quit);
}
