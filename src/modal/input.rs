//! Single-line text field used by prompt dialogs

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Editable single-line field with a grapheme-aware cursor.
///
/// The cursor is a byte offset that always sits on a grapheme boundary.
/// While `all_selected` is set, the next edit replaces the whole content.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    text: String,
    cursor: usize,
    all_selected: bool,
    placeholder: String,
    masked: bool,
}

impl InputField {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self {
            text,
            cursor,
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Byte offset of the cursor
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn is_all_selected(&self) -> bool {
        self.all_selected && !self.text.is_empty()
    }

    pub fn select_all(&mut self) {
        self.all_selected = true;
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.all_selected = false;
    }

    /// Drop the selection, deleting the selected text. Returns whether
    /// anything was removed.
    fn take_selection(&mut self) -> bool {
        if self.is_all_selected() {
            self.clear();
            true
        } else {
            self.all_selected = false;
            false
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.take_selection();
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        self.take_selection();
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Delete the grapheme before the cursor (Backspace)
    pub fn delete_previous_char(&mut self) {
        if self.take_selection() {
            return;
        }
        if let Some(start) = self.previous_boundary() {
            self.text.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    /// Delete the grapheme under the cursor (Delete)
    pub fn delete_char(&mut self) {
        if self.take_selection() {
            return;
        }
        if let Some(end) = self.next_boundary() {
            self.text.replace_range(self.cursor..end, "");
        }
    }

    pub fn move_left(&mut self) {
        if self.all_selected {
            self.all_selected = false;
            self.cursor = 0;
            return;
        }
        if let Some(start) = self.previous_boundary() {
            self.cursor = start;
        }
    }

    pub fn move_right(&mut self) {
        if self.all_selected {
            self.all_selected = false;
            self.cursor = self.text.len();
            return;
        }
        if let Some(end) = self.next_boundary() {
            self.cursor = end;
        }
    }

    pub fn move_home(&mut self) {
        self.all_selected = false;
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.all_selected = false;
        self.cursor = self.text.len();
    }

    fn previous_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
    }

    /// Text as it should appear on screen
    pub fn display_text(&self) -> String {
        if self.masked {
            "•".repeat(self.text.graphemes(true).count())
        } else {
            self.text.clone()
        }
    }

    /// Display column of the cursor
    pub fn cursor_column(&self) -> u16 {
        let before = &self.text[..self.cursor];
        let width = if self.masked {
            before.graphemes(true).count()
        } else {
            before.width()
        };
        width.min(u16::MAX as usize) as u16
    }

    /// Apply an editing key. Returns `true` when the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => self.select_all(),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.clear(),
            (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert_char(c)
            }
            (KeyCode::Backspace, _) => self.delete_previous_char(),
            (KeyCode::Delete, _) => self.delete_char(),
            (KeyCode::Left, _) => self.move_left(),
            (KeyCode::Right, _) => self.move_right(),
            (KeyCode::Home, _) => self.move_home(),
            (KeyCode::End, _) => self.move_end(),
            _ => return false,
        }
        true
    }
}
