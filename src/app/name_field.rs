//! Single-line text field used by the "Add New Model" prompt

/// Editable model name with a cursor
///
/// The cursor counts characters, not bytes, so it can never land inside a
/// multi-byte character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameField {
    text: String,
    cursor: usize,
}

impl NameField {
    /// Create an empty field
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    /// Current contents, untrimmed
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters from the start
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when there is nothing but whitespace to submit
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Contents on either side of the cursor
    #[must_use]
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.byte_offset(self.cursor))
    }

    /// Empty the field
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert `c` at the cursor; line breaks are ignored
    pub fn insert(&mut self, c: char) {
        if is_line_break(c) {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor
    pub fn erase_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    /// Remove the character under the cursor
    pub fn erase_forward(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    /// Move one character left
    pub const fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move one character right
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    /// Move before the first character
    pub const fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    /// Move after the last character
    pub fn move_to_end(&mut self) {
        self.cursor = self.len();
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

const fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}
