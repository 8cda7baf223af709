//! Model menu and the "Add New Model" prompt

use super::{App, Mode};
use tracing::debug;

impl App {
    /// Open the model menu with the current model highlighted
    pub fn open_model_menu(&mut self) {
        let cursor = self.models.current_index();
        self.enter_mode(Mode::ModelMenu { cursor });
    }

    /// Number of rows in the model menu (models plus "New Model…")
    #[must_use]
    pub const fn model_menu_len(&self) -> usize {
        self.models.len() + 1
    }

    /// Highlighted row of the model menu, if it is open
    #[must_use]
    pub const fn model_menu_cursor(&self) -> Option<usize> {
        match self.mode {
            Mode::ModelMenu { cursor } => Some(cursor),
            _ => None,
        }
    }

    /// Move the menu highlight down, wrapping
    pub fn model_menu_next(&mut self) {
        if let Mode::ModelMenu { cursor } = self.mode {
            let len = self.model_menu_len();
            self.mode = Mode::ModelMenu {
                cursor: (cursor + 1) % len,
            };
        }
    }

    /// Move the menu highlight up, wrapping
    pub fn model_menu_prev(&mut self) {
        if let Mode::ModelMenu { cursor } = self.mode {
            let len = self.model_menu_len();
            self.mode = Mode::ModelMenu {
                cursor: cursor.checked_sub(1).unwrap_or(len - 1),
            };
        }
    }

    /// Act on the highlighted menu row
    ///
    /// A model row makes that model current; the trailing row opens the
    /// "Add New Model" prompt.
    pub fn confirm_model_menu(&mut self) {
        let Some(cursor) = self.model_menu_cursor() else {
            return;
        };

        if cursor >= self.models.len() {
            self.start_new_model_prompt();
        } else {
            self.select_model(cursor);
            self.exit_mode();
        }
    }

    /// Make the known model at `index` current and notify the session
    pub fn select_model(&mut self, index: usize) {
        let Some(model) = self.models.select(index).map(str::to_string) else {
            return;
        };
        self.session.model_selected(&model);
        self.set_status(format!("Model set to {model}"));
    }

    /// Open the "Add New Model" prompt with an empty field
    pub fn start_new_model_prompt(&mut self) {
        self.name_field.clear();
        self.enter_mode(Mode::NewModelPrompt);
    }

    /// Whether the prompt's Add action would do anything
    #[must_use]
    pub fn can_submit_new_model(&self) -> bool {
        !self.name_field.is_blank()
    }

    /// Add the typed name as a model and make it current
    ///
    /// Blank input keeps the prompt open and changes nothing. Returns true
    /// when a model was added.
    pub fn submit_new_model(&mut self) -> bool {
        let Some(model) = self.models.add(self.name_field.text()).map(str::to_string) else {
            debug!("Ignoring blank model name");
            return false;
        };

        self.name_field.clear();
        self.exit_mode();
        self.session.model_selected(&model);
        self.set_status(format!("Added {model}"));
        true
    }

    /// Close the prompt without touching the model list
    pub fn cancel_new_model_prompt(&mut self) {
        self.name_field.clear();
        self.exit_mode();
    }
}
