//! Numeric entry fields and Home-screen focus.

/// Which field on the Home screen receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeField {
    #[default]
    Min,
    Max,
}

impl HomeField {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Min => Self::Max,
            Self::Max => Self::Min,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Min => "Minimum",
            Self::Max => "Maximum",
        }
    }
}

/// Single-line editor that only admits an optionally negative integer.
///
/// Accepts ASCII digits anywhere and a single `-` at the start, so the cursor
/// is both a char and a byte index.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NumericDraft {
    text: String,
    cursor: usize,
}

impl NumericDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled with `value`, cursor at the end.
    #[must_use]
    pub fn with_value(value: i64) -> Self {
        let text = value.to_string();
        let cursor = text.len();
        Self { text, cursor }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = self.cursor.saturating_add(1).min(self.text.len());
    }

    pub fn move_cursor_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Insert `c` at the cursor if it keeps the text a (partial) integer.
    ///
    /// Returns whether the character was accepted.
    pub fn enter_char(&mut self, c: char) -> bool {
        let accepted = match c {
            '0'..='9' => !(self.cursor == 0 && self.text.starts_with('-')),
            '-' => self.cursor == 0 && !self.text.starts_with('-'),
            _ => false,
        };
        if accepted {
            self.text.insert(self.cursor, c);
            self.cursor += 1;
        }
        accepted
    }

    /// Insert pasted text, dropping anything that is not part of an integer.
    pub fn enter_text(&mut self, text: &str) {
        for c in text.chars() {
            self.enter_char(c);
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.text.remove(self.cursor);
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }
}
