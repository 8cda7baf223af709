//! Shortcut list selection

use super::App;

impl App {
    /// Select the row at a display position
    ///
    /// A position past the end clears the selection.
    pub fn select_shortcut_at(&mut self, index: usize) {
        self.selection = self.shortcuts.get_by_index(index).map(|e| e.id);
    }

    /// Clear the row selection
    pub const fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Move the selection down one row, wrapping at the end
    ///
    /// With nothing selected, selects the first row.
    pub fn select_next_shortcut(&mut self) {
        let count = self.shortcuts.len();
        if count == 0 {
            self.selection = None;
            return;
        }
        let next = self.selected_index().map_or(0, |i| (i + 1) % count);
        self.select_shortcut_at(next);
    }

    /// Move the selection up one row, wrapping at the start
    ///
    /// With nothing selected, selects the last row.
    pub fn select_prev_shortcut(&mut self) {
        let count = self.shortcuts.len();
        if count == 0 {
            self.selection = None;
            return;
        }
        let prev = self
            .selected_index()
            .map_or(count - 1, |i| i.checked_sub(1).unwrap_or(count - 1));
        self.select_shortcut_at(prev);
    }
}
