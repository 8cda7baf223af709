//! Application state for the coach popover

mod event;
mod filter;
mod models;
mod name_field;
mod navigation;

pub use event::{Event, EventSource};
pub use filter::{Chord, KeyFilter, Propagation};
pub use name_field::NameField;

use crate::config::Config;
use crate::models::ModelCatalog;
use crate::session::{LoggingSession, ModelSession};
use crate::shortcut::{ShortcutEntry, ShortcutId, ShortcutList};
use tracing::info;

/// Which surface currently receives keys after the key filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// The popover itself: model line, reset button, shortcut list
    #[default]
    Normal,
    /// Model dropdown is open; `cursor` indexes the known models, with one
    /// extra slot past the end for "New Model…"
    ModelMenu {
        /// Highlighted row
        cursor: usize,
    },
    /// "Add New Model" prompt is open
    NewModelPrompt,
    /// Keybinding help overlay
    Help,
}

/// The interaction controller: owns all popover state
#[derive(Debug)]
pub struct App {
    /// Loaded configuration
    pub config: Config,

    /// Shortcut rows in display order
    pub shortcuts: ShortcutList,

    /// Highlighted row, if any
    pub selection: Option<ShortcutId>,

    /// Known models and the current one
    pub models: ModelCatalog,

    /// Active mode
    pub mode: Mode,

    /// Text field of the "Add New Model" prompt
    pub name_field: NameField,

    /// One-line feedback shown at the bottom of the popover
    pub status_message: Option<String>,

    /// Set when the event loop should exit
    pub should_quit: bool,

    filter: KeyFilter,
    session: Box<dyn ModelSession>,
}

impl App {
    /// Create the controller from configuration, reporting to `session`
    #[must_use]
    pub fn new(config: Config, session: Box<dyn ModelSession>) -> Self {
        let shortcuts = ShortcutList::from_names(&config.shortcuts);
        let models = ModelCatalog::from_seeds(&config.models);
        let filter = KeyFilter::new(config.command_mask());

        info!(
            shortcuts = shortcuts.len(),
            models = models.len(),
            current = models.current(),
            "Popover initialized"
        );

        Self {
            config,
            shortcuts,
            selection: None,
            models,
            mode: Mode::Normal,
            name_field: NameField::new(),
            status_message: None,
            should_quit: false,
            filter,
            session,
        }
    }

    /// Create the controller with a [`LoggingSession`]
    #[must_use]
    pub fn with_logging_session(config: Config) -> Self {
        Self::new(config, Box::new(LoggingSession))
    }

    /// The key filter that runs ahead of mode handling
    #[must_use]
    pub const fn key_filter(&self) -> KeyFilter {
        self.filter
    }

    /// Switch to a new mode
    pub const fn enter_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Return to the popover
    pub const fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Show a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// The selected entry, or `None` when nothing is selected or the
    /// selection no longer names a row in the list
    #[must_use]
    pub fn selected_shortcut(&self) -> Option<&ShortcutEntry> {
        self.selection.and_then(|id| self.shortcuts.get(id))
    }

    /// Display position of the selected entry
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.and_then(|id| self.shortcuts.position(id))
    }

    /// Remove the selected entry and clear the selection
    ///
    /// Does nothing when no row is selected.
    pub fn delete_selected(&mut self) -> Option<ShortcutEntry> {
        let id = self.selection?;
        let removed = self.shortcuts.remove(id);
        // A dangling id is treated as no selection either way
        self.selection = None;

        if let Some(entry) = &removed {
            info!(id = %entry.id.short(), name = %entry.name, "Deleted shortcut");
            self.set_status(format!("Deleted {}", entry.name));
        }
        removed
    }

    /// Flip the star on the selected entry
    ///
    /// Returns the new starred state, or `None` when no row is selected.
    pub fn toggle_selected_star(&mut self) -> Option<bool> {
        let id = self.selection?;
        let starred = self.shortcuts.toggle_star(id)?;
        info!(id = %id.short(), starred, "Toggled star");
        Some(starred)
    }

    /// Ask the model session to drop its context for the current model
    pub fn reset_context(&mut self) {
        let model = self.models.current().to_string();
        self.session.reset_context(&model);
        self.set_status(format!("Context reset for {model}"));
    }

    /// Stop the event loop
    pub const fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests;
