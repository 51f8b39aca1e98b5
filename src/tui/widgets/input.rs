//! Single-line text field
//!
//! Backs both the grid cell editor and the month/year fields. The cursor
//! counts characters, so typing "é" or "û" never splits a UTF-8 sequence.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    /// Cursor position in characters, `0..=char_count`
    cursor: usize,
    label: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heading drawn before the text, e.g. "Month"
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Start with `text`, cursor at the end
    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.cursor = self.char_count();
        self
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the character at `index` (or the end of the text)
    fn offset(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map_or(self.text.len(), |(at, _)| at)
    }

    pub fn insert(&mut self, c: char) {
        let at = self.offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Remove the character left of the cursor
    pub fn backspace(&mut self) {
        if let Some(index) = self.cursor.checked_sub(1) {
            self.text.remove(self.offset(index));
            self.cursor = index;
        }
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            self.text.remove(self.offset(self.cursor));
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Text split around the cursor: before, under, after
    fn split_at_cursor(&self) -> (String, char, String) {
        let mut chars = self.text.chars();
        let before: String = chars.by_ref().take(self.cursor).collect();
        let under = chars.next().unwrap_or(' ');
        (before, under, chars.collect())
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (before, under, after) = self.split_at_cursor();
        let mut spans = Vec::with_capacity(5);
        if !self.label.is_empty() {
            spans.push(Span::styled(
                format!("{}: ", self.label),
                Style::default().fg(Color::Cyan),
            ));
        }
        spans.push(Span::styled(before, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            under.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(after, Style::default().fg(Color::White)));

        Line::from(spans).render(area, buf);
    }
}
