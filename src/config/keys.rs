//! Rebindable keys for the popover's normal mode
//!
//! The delete and star chords are not listed here: they are handled by the
//! key filter before any binding is consulted.

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Something a bound key can do in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Select the next shortcut row
    NextShortcut,
    /// Select the previous shortcut row
    PrevShortcut,
    /// Clear the row selection
    ClearSelection,
    /// Open the model menu
    ModelMenu,
    /// Open the "Add New Model" prompt
    NewModel,
    /// Reset the context of the current model
    ResetContext,
    /// Show help
    Help,
    /// Quit application
    Quit,
}

/// Heading an action is listed under in the help overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionGroup {
    /// Shortcut list navigation
    Shortcuts,
    /// Model picking and context reset
    Model,
    /// Everything else
    Other,
}

impl ActionGroup {
    /// Heading text
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Shortcuts => "Shortcuts",
            Self::Model => "Model",
            Self::Other => "Other",
        }
    }
}

impl Action {
    /// Every action, in help order
    pub const ALL: [Self; 8] = [
        Self::NextShortcut,
        Self::PrevShortcut,
        Self::ClearSelection,
        Self::ModelMenu,
        Self::NewModel,
        Self::ResetContext,
        Self::Help,
        Self::Quit,
    ];

    /// Short description for the help overlay
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NextShortcut => "Select next",
            Self::PrevShortcut => "Select previous",
            Self::ClearSelection => "Clear selection",
            Self::ModelMenu => "Choose model",
            Self::NewModel => "New model",
            Self::ResetContext => "Reset context",
            Self::Help => "Show this help",
            Self::Quit => "Quit",
        }
    }

    /// Help heading
    #[must_use]
    pub const fn group(self) -> ActionGroup {
        match self {
            Self::NextShortcut | Self::PrevShortcut | Self::ClearSelection => {
                ActionGroup::Shortcuts
            }
            Self::ModelMenu | Self::NewModel | Self::ResetContext => ActionGroup::Model,
            Self::Help | Self::Quit => ActionGroup::Other,
        }
    }
}

const DEFAULT_BINDINGS: &[(&str, Action)] = &[
    ("j", Action::NextShortcut),
    ("Down", Action::NextShortcut),
    ("k", Action::PrevShortcut),
    ("Up", Action::PrevShortcut),
    ("Esc", Action::ClearSelection),
    ("m", Action::ModelMenu),
    ("Tab", Action::ModelMenu),
    ("n", Action::NewModel),
    ("r", Action::ResetContext),
    ("?", Action::Help),
    ("q", Action::Quit),
];

/// Key name to action map, as stored in the config file
///
/// Keys are named the way [`key_name`] prints them, e.g. `"j"`, `"Down"`,
/// `"Ctrl+r"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    bindings: BTreeMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: DEFAULT_BINDINGS
                .iter()
                .map(|&(key, action)| (key.to_string(), action))
                .collect(),
        }
    }
}

impl KeyBindings {
    /// Fill in default bindings for keys the user left unbound
    pub fn merge_defaults(&mut self) {
        for &(key, action) in DEFAULT_BINDINGS {
            self.bindings.entry(key.to_string()).or_insert(action);
        }
    }

    /// Action bound to a key press, if any
    #[must_use]
    pub fn action_for(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let name = key_name(code, modifiers)?;
        self.bindings.get(&name).copied()
    }

    /// Keys bound to `action`, single characters first
    #[must_use]
    pub fn keys_for(&self, action: Action) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .bindings
            .iter()
            .filter(|&(_, &bound)| bound == action)
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_by_key(|key| (key.chars().count() != 1, *key));
        keys
    }

    /// The key to advertise for `action` in one-line hints
    #[must_use]
    pub fn primary_key(&self, action: Action) -> Option<&str> {
        self.keys_for(action).first().copied().map(display_key)
    }

    /// Help overlay row, e.g. `"  j/Down     Select next"`
    #[must_use]
    pub fn help_line(&self, action: Action) -> String {
        let keys = self
            .keys_for(action)
            .into_iter()
            .map(display_key)
            .collect::<Vec<_>>()
            .join("/");
        format!("  {keys:<10} {}", action.description())
    }
}

/// Key name as shown to the user
fn display_key(key: &str) -> &str {
    if key == " " { "Space" } else { key }
}

/// Config-file name of a key press, or `None` for keys that cannot be bound
///
/// Shift is implied by the character itself for printable keys.
#[must_use]
pub fn key_name(code: KeyCode, modifiers: KeyModifiers) -> Option<String> {
    let key = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::BackTab => "Shift+Tab".into(),
        KeyCode::Esc => "Esc".into(),
        KeyCode::Up => "Up".into(),
        KeyCode::Down => "Down".into(),
        KeyCode::Left => "Left".into(),
        KeyCode::Right => "Right".into(),
        KeyCode::Home => "Home".into(),
        KeyCode::End => "End".into(),
        KeyCode::PageUp => "PageUp".into(),
        KeyCode::PageDown => "PageDown".into(),
        KeyCode::Backspace => "Backspace".into(),
        KeyCode::Delete => "Delete".into(),
        _ => return None,
    };

    // Shift is part of the name for characters and BackTab
    let shift = modifiers.contains(KeyModifiers::SHIFT)
        && !matches!(code, KeyCode::Char(_) | KeyCode::BackTab);
    let prefixes = [
        (modifiers.contains(KeyModifiers::CONTROL), "Ctrl+"),
        (modifiers.contains(KeyModifiers::ALT), "Alt+"),
        (modifiers.contains(KeyModifiers::SUPER), "Super+"),
        (shift, "Shift+"),
    ];
    let mut name: String = prefixes
        .iter()
        .filter(|(held, _)| *held)
        .map(|(_, prefix)| *prefix)
        .collect();
    name.push_str(&key);
    Some(name)
}
