//! Known model names and the currently active model

use tracing::{info, warn};

/// Model used when no seed names are configured
pub const DEFAULT_MODEL: &str = "Llama 3";

/// Known model names plus the one currently in use
///
/// `current` is always a member of `known`: adding a name appends it before
/// making it current, and selecting only accepts names already known.
/// Duplicate names are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCatalog {
    known: Vec<String>,
    current: String,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self {
            known: vec![DEFAULT_MODEL.to_string()],
            current: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ModelCatalog {
    /// Build a catalog from seed names; the first becomes current
    ///
    /// Seeds are trimmed and blank seeds dropped. With no usable seed the
    /// catalog falls back to [`DEFAULT_MODEL`].
    #[must_use]
    pub fn from_seeds<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let known: Vec<String> = seeds
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        match known.first() {
            Some(first) => Self {
                current: first.clone(),
                known,
            },
            None => {
                warn!(default = DEFAULT_MODEL, "No usable model seeds, using default");
                Self::default()
            }
        }
    }

    /// All known names, in insertion order
    #[must_use]
    pub fn known(&self) -> &[String] {
        &self.known
    }

    /// The active model name
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Number of known names
    #[must_use]
    pub const fn len(&self) -> usize {
        self.known.len()
    }

    /// Always false; a catalog holds at least one name
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    /// Position of the current model in the known list
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.known
            .iter()
            .position(|m| *m == self.current)
            .unwrap_or(0)
    }

    /// Append a new name and make it current
    ///
    /// The name is trimmed first. Blank input leaves the catalog untouched
    /// and returns `None`; otherwise returns the name that was added.
    pub fn add(&mut self, name: &str) -> Option<&str> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        self.known.push(name.to_string());
        self.current = name.to_string();
        info!(model = %self.current, known = self.known.len(), "Added model");
        Some(&self.current)
    }

    /// Make the name at `index` current
    ///
    /// Returns the selected name, or `None` if the index is out of range.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        let name = self.known.get(index)?;
        self.current.clone_from(name);
        info!(model = %self.current, "Selected model");
        Some(&self.current)
    }
}
