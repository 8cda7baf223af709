//! Property tests for list and model-catalog mutations

use crate::common::{app_with_shortcuts, rows};
use coach::ModelCatalog;
use coach::app::KeyFilter;
use proptest::prelude::*;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn shortcut_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z][A-Za-z +]{0,12}", 1..8)
}

fn plain_modifiers() -> impl Strategy<Value = KeyModifiers> {
    prop_oneof![
        Just(KeyModifiers::NONE),
        Just(KeyModifiers::SHIFT),
        Just(KeyModifiers::ALT),
    ]
}

fn any_key_code() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        any::<char>().prop_map(KeyCode::Char),
        Just(KeyCode::Enter),
        Just(KeyCode::Backspace),
        Just(KeyCode::Delete),
        Just(KeyCode::Esc),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
    ]
}

fn filter() -> KeyFilter {
    KeyFilter::new(KeyModifiers::SUPER | KeyModifiers::CONTROL)
}

proptest! {
    #[test]
    fn prop_add_grows_by_one_and_sets_current(
        names in prop::collection::vec("[A-Za-z0-9][A-Za-z0-9 .:-]{0,15}", 1..10)
    ) {
        let mut catalog = ModelCatalog::default();
        for name in &names {
            let before = catalog.len();
            let _ = catalog.add(name);
            prop_assert_eq!(catalog.len(), before + 1);
            prop_assert_eq!(catalog.current(), name.trim());
            prop_assert!(catalog.known().iter().any(|m| m == catalog.current()));
        }
    }

    #[test]
    fn prop_blank_add_is_noop(blank in "[ \t]{0,6}") {
        let mut catalog = ModelCatalog::from_seeds(["Llama 3", "Mistral"]);
        let before = catalog.clone();
        prop_assert_eq!(catalog.add(&blank), None);
        prop_assert_eq!(catalog, before);
    }

    #[test]
    fn prop_double_star_toggle_restores(names in shortcut_names(), pick in any::<prop::sample::Index>()) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let (mut app, _) = app_with_shortcuts(&refs);
        app.select_shortcut_at(pick.index(app.shortcuts.len()));
        let before = app.shortcuts.clone();
        let star = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::SUPER);

        filter().intercept(&mut app, &star);
        filter().intercept(&mut app, &star);

        prop_assert_eq!(app.shortcuts, before);
    }

    #[test]
    fn prop_delete_removes_exactly_selected(names in shortcut_names(), pick in any::<prop::sample::Index>()) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let (mut app, _) = app_with_shortcuts(&refs);
        let index = pick.index(app.shortcuts.len());
        app.select_shortcut_at(index);
        let selected = app.selection.ok_or_else(|| TestCaseError::fail("no selection"))?;
        let mut expected = rows(&app);
        expected.remove(index);

        filter().intercept(&mut app, &KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));

        prop_assert_eq!(rows(&app), expected);
        prop_assert!(app.shortcuts.get(selected).is_none());
        prop_assert_eq!(app.selection, None);
    }

    #[test]
    fn prop_delete_without_selection_keeps_list(names in shortcut_names()) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let (mut app, _) = app_with_shortcuts(&refs);
        let before = app.shortcuts.clone();

        filter().intercept(&mut app, &KeyEvent::new(KeyCode::Char('w'), KeyModifiers::SUPER));

        prop_assert_eq!(app.shortcuts, before);
    }

    #[test]
    fn prop_keys_without_command_never_mutate(
        names in shortcut_names(),
        pick in any::<prop::sample::Index>(),
        keys in prop::collection::vec((any_key_code(), plain_modifiers()), 1..20),
    ) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let (mut app, _) = app_with_shortcuts(&refs);
        app.select_shortcut_at(pick.index(app.shortcuts.len()));
        let before = app.shortcuts.clone();

        for (code, modifiers) in keys {
            let result = filter().intercept(&mut app, &KeyEvent::new(code, modifiers));
            prop_assert!(!result.is_handled());
        }

        prop_assert_eq!(app.shortcuts, before);
    }
}
