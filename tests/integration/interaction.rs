//! End-to-end interaction flows through key dispatch

use crate::common::{SessionCall, app_with_shortcuts, press, press_cmd, rows, type_str};
use coach::Mode;
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::KeyCode;

#[test]
fn test_star_then_delete_first_row() {
    let (mut app, _) = app_with_shortcuts(&["Shift + Cmd + L", "Option + Space"]);
    press(&mut app, KeyCode::Down);

    press_cmd(&mut app, 's');
    assert_eq!(
        rows(&app),
        vec![
            ("Shift + Cmd + L".to_string(), true),
            ("Option + Space".to_string(), false),
        ]
    );

    press_cmd(&mut app, 'w');
    assert_eq!(rows(&app), vec![("Option + Space".to_string(), false)]);
    assert_eq!(app.selection, None);
}

#[test]
fn test_chords_without_selection_do_nothing() {
    let (mut app, _) = app_with_shortcuts(&["a", "b"]);
    let before = rows(&app);

    press_cmd(&mut app, 's');
    press_cmd(&mut app, 'w');

    assert_eq!(rows(&app), before);
}

#[test]
fn test_delete_then_navigate_picks_surviving_rows() {
    let (mut app, _) = app_with_shortcuts(&["a", "b", "c"]);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press_cmd(&mut app, 'w');

    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_shortcut().map(|e| e.name.as_str()), Some("a"));
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_shortcut().map(|e| e.name.as_str()), Some("c"));
}

#[test]
fn test_add_model_through_menu() {
    let (mut app, calls) = app_with_shortcuts(&[]);

    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::NewModelPrompt);

    type_str(&mut app, "Mistral");
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.models.known(),
        ["Llama 3".to_string(), "Mistral".to_string()]
    );
    assert_eq!(app.models.current(), "Mistral");
    assert_eq!(
        *calls.borrow(),
        vec![SessionCall::Selected("Mistral".to_string())]
    );
}

#[test]
fn test_switch_back_and_reset() {
    let (mut app, calls) = app_with_shortcuts(&[]);
    press(&mut app, KeyCode::Char('n'));
    type_str(&mut app, "phi3");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('r'));

    assert_eq!(app.models.current(), "Llama 3");
    assert_eq!(
        *calls.borrow(),
        vec![
            SessionCall::Selected("phi3".to_string()),
            SessionCall::Selected("Llama 3".to_string()),
            SessionCall::Reset("Llama 3".to_string()),
        ]
    );
}

#[test]
fn test_cancelled_prompt_leaves_models() {
    let (mut app, calls) = app_with_shortcuts(&[]);
    press(&mut app, KeyCode::Char('n'));
    type_str(&mut app, "Mistral");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.models.known(), ["Llama 3".to_string()]);
    assert!(app.name_field.text().is_empty());
    assert!(calls.borrow().is_empty());
}
