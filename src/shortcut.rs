//! Shortcut entries and the ordered list the popover displays
//!
//! Rows are addressed by a stable [`ShortcutId`], never by position, so that
//! removing a row does not shift the identity of the rows after it. Every
//! lookup is total: an unknown id is "not found", never an error.

use std::fmt;
use uuid::Uuid;

/// Unique identity of a shortcut row for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShortcutId(Uuid);

impl ShortcutId {
    /// Generate a fresh identity
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First 8 characters of the id, for log lines
    #[must_use]
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for ShortcutId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single keyboard shortcut row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutEntry {
    /// Stable identity
    pub id: ShortcutId,

    /// Text shown in the row (e.g. "Shift + Cmd + L")
    pub name: String,

    /// Whether the row carries a star
    pub is_starred: bool,
}

impl ShortcutEntry {
    /// Create an unstarred entry with a fresh identity
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ShortcutId::new(),
            name: name.into(),
            is_starred: false,
        }
    }
}

/// Ordered list of shortcut rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutList {
    entries: Vec<ShortcutEntry>,
}

impl ShortcutList {
    /// Build a list from display names, in order
    ///
    /// Names are trimmed and blank names are skipped.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = names
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref().trim();
                (!name.is_empty()).then(|| ShortcutEntry::new(name))
            })
            .collect();
        Self { entries }
    }

    /// Remove the entry with the given id, returning it if it was present
    pub fn remove(&mut self, id: ShortcutId) -> Option<ShortcutEntry> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }

    /// Flip the star on the entry with the given id
    ///
    /// Returns the new starred state, or `None` if no entry matched.
    pub fn toggle_star(&mut self, id: ShortcutId) -> Option<bool> {
        let entry = self.get_mut(id)?;
        entry.is_starred = !entry.is_starred;
        Some(entry.is_starred)
    }

    /// Get an entry by id
    #[must_use]
    pub fn get(&self, id: ShortcutId) -> Option<&ShortcutEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Get a mutable entry by id
    pub fn get_mut(&mut self, id: ShortcutId) -> Option<&mut ShortcutEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Position of the entry with the given id
    #[must_use]
    pub fn position(&self, id: ShortcutId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Get an entry by display position
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&ShortcutEntry> {
        self.entries.get(index)
    }

    /// Number of entries
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list has no entries
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in display order
    pub fn iter(&self) -> impl Iterator<Item = &ShortcutEntry> {
        self.entries.iter()
    }

    /// Entries as a slice, in display order
    #[must_use]
    pub fn as_slice(&self) -> &[ShortcutEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a ShortcutList {
    type Item = &'a ShortcutEntry;
    type IntoIter = std::slice::Iter<'a, ShortcutEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
