//! Common test utilities shared across integration tests

use coach::{App, Config, ModelSession};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::rc::Rc;

/// A request the popover sent to its model session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCall {
    Reset(String),
    Selected(String),
}

/// Session that records every request for later assertions
#[derive(Debug, Default, Clone)]
pub struct RecordingSession {
    pub calls: Rc<RefCell<Vec<SessionCall>>>,
}

impl ModelSession for RecordingSession {
    fn reset_context(&mut self, model: &str) {
        self.calls
            .borrow_mut()
            .push(SessionCall::Reset(model.to_string()));
    }

    fn model_selected(&mut self, model: &str) {
        self.calls
            .borrow_mut()
            .push(SessionCall::Selected(model.to_string()));
    }
}

/// Build an app with the given shortcut seeds and a recording session
pub fn app_with_shortcuts(names: &[&str]) -> (App, Rc<RefCell<Vec<SessionCall>>>) {
    let config = Config {
        shortcuts: names.iter().map(ToString::to_string).collect(),
        ..Config::default()
    };
    let session = RecordingSession::default();
    let calls = Rc::clone(&session.calls);
    (App::new(config, Box::new(session)), calls)
}

/// Feed a plain key press through the full dispatch path
pub fn press(app: &mut App, code: KeyCode) {
    coach::tui::handle_key_event(app, &KeyEvent::new(code, KeyModifiers::NONE));
}

/// Feed a Command+`c` chord through the full dispatch path
pub fn press_cmd(app: &mut App, c: char) {
    coach::tui::handle_key_event(app, &KeyEvent::new(KeyCode::Char(c), KeyModifiers::SUPER));
}

/// Type text into whatever currently accepts characters
pub fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Shortcut rows as (name, starred) pairs
pub fn rows(app: &App) -> Vec<(String, bool)> {
    app.shortcuts
        .iter()
        .map(|e| (e.name.clone(), e.is_starred))
        .collect()
}
