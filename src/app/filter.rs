//! Key filter that runs before any mode-specific handling
//!
//! The filter sees every key event first. When it recognizes a chord it
//! applies it to the shortcut list and reports the event as handled, so no
//! other handler observes it. Everything else passes through untouched.

use super::App;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

/// Whether dispatch should continue after the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// The filter consumed the event
    Handled,
    /// Pass the event on to normal handling
    Unhandled,
}

impl Propagation {
    /// True when the event was consumed
    #[must_use]
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// A recognized command chord
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chord {
    /// Command+W: remove the selected shortcut
    DeleteSelected,
    /// Command+S: toggle the star on the selected shortcut
    ToggleStar,
}

/// Interceptor for the delete and star chords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFilter {
    command_mask: KeyModifiers,
}

impl KeyFilter {
    /// Create a filter where any modifier in `command_mask` acts as "command"
    #[must_use]
    pub const fn new(command_mask: KeyModifiers) -> Self {
        Self { command_mask }
    }

    /// Modifiers that count as "command"
    #[must_use]
    pub const fn command_mask(&self) -> KeyModifiers {
        self.command_mask
    }

    /// Map a key event to a chord, if it is one
    ///
    /// Letters match case-insensitively, since Shift or caps lock may be
    /// reported along with the chord.
    #[must_use]
    pub fn chord_for(&self, key: &KeyEvent) -> Option<Chord> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if !key.modifiers.intersects(self.command_mask) {
            return None;
        }

        match key.code {
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'w') => Some(Chord::DeleteSelected),
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'s') => Some(Chord::ToggleStar),
            _ => None,
        }
    }

    /// Apply a chord to `app` if `key` is one
    ///
    /// Chords are consumed even when nothing is selected; they simply do
    /// nothing in that case.
    pub fn intercept(&self, app: &mut App, key: &KeyEvent) -> Propagation {
        let Some(chord) = self.chord_for(key) else {
            return Propagation::Unhandled;
        };

        debug!(?chord, selection = ?app.selection, "Intercepted chord");
        match chord {
            Chord::DeleteSelected => {
                app.delete_selected();
            }
            Chord::ToggleStar => {
                app.toggle_selected_star();
            }
        }
        Propagation::Handled
    }
}
