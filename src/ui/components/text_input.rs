//! Single-line text input state with cursor management

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Single-line input; `cursor` is a byte offset that always sits on a char boundary
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    input: String,
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial value, cursor at the end
    pub fn with_value(value: &str) -> Self {
        let mut state = Self::new();
        state.set(value);
        state
    }

    /// Set the input value and move cursor to end
    pub fn set(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor = self.input.len();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    fn prev_boundary(&self) -> usize {
        self.input[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.input[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.input.len())
    }

    /// Insert a character at cursor position
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            let start = self.prev_boundary();
            self.input.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    /// Delete character at cursor (delete)
    pub fn delete_forward(&mut self) {
        if self.cursor < self.input.len() {
            let end = self.next_boundary();
            self.input.drain(self.cursor..end);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    /// Delete from cursor to start of line (Ctrl+U)
    pub fn delete_to_start(&mut self) {
        self.input.drain(..self.cursor);
        self.cursor = 0;
    }

    /// Delete the word before the cursor; commas and spaces both separate words
    pub fn delete_word(&mut self) {
        let is_sep = |c: char| c == ' ' || c == ',';
        let head = &self.input[..self.cursor];
        let trimmed = head.trim_end_matches(is_sep);
        let start = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| is_sep(*c))
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        self.input.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Display column of the cursor
    pub fn cursor_column(&self) -> u16 {
        self.input[..self.cursor].width() as u16
    }

    /// Render with placeholder text when empty; draws a block cursor when `focused`
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        style: Style,
        placeholder: Option<(&str, Style)>,
        focused: bool,
    ) {
        // Keep the cursor visible when the text is wider than the box
        let col = self.cursor_column();
        let scroll = col.saturating_sub(area.width.saturating_sub(1));

        match placeholder {
            Some((text, placeholder_style)) if self.input.is_empty() => {
                Paragraph::new(text)
                    .style(placeholder_style)
                    .render(area, buf);
            }
            _ => {
                Paragraph::new(self.input.as_str())
                    .style(style)
                    .scroll((0, scroll))
                    .render(area, buf);
            }
        }

        if focused && area.width > 0 && area.height > 0 {
            let cursor_x = area.x + col - scroll;
            buf[(cursor_x, area.y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }
}
