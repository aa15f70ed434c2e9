//! Text input widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::presentation::theme::Theme;

/// Single-line text field. The cursor counts characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    masked: bool,
    placeholder: String,
    label: String,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            masked: false,
            placeholder: String::new(),
            label: label.into(),
        }
    }

    /// Hides the value behind bullets.
    #[must_use]
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Focused inputs draw the cursor and an accent border.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the text and moves the cursor to its end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Inserts character at cursor.
    pub fn input_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Moves the cursor one character left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one character right.
    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor before the first character.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor after the last character.
    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    fn display_text(&self) -> String {
        if self.value.is_empty() {
            self.placeholder.clone()
        } else if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    fn cursor_offset(&self) -> usize {
        if self.masked {
            self.cursor
        } else {
            self.value[..self.byte_index(self.cursor)].width()
        }
    }
}

/// Renders a [`TextInput`] with theme colors.
pub struct TextInputView<'a> {
    input: &'a TextInput,
    theme: &'a Theme,
}

impl<'a> TextInputView<'a> {
    /// Creates the view.
    #[must_use]
    pub const fn new(input: &'a TextInput, theme: &'a Theme) -> Self {
        Self { input, theme }
    }
}

impl Widget for TextInputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let input = self.input;
        let border_style = if input.focused {
            Style::default().fg(self.theme.accent)
        } else {
            self.theme.dimmed_style
        };

        let text_style = if input.value.is_empty() {
            self.theme.dimmed_style
        } else {
            Style::default().fg(self.theme.text)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(input.label.as_str());

        let inner = block.inner(area);

        Paragraph::new(input.display_text())
            .style(text_style)
            .render(inner, buf);
        block.render(area, buf);

        if input.focused && inner.width > 0 && inner.height > 0 {
            let offset = u16::try_from(input.cursor_offset()).unwrap_or(u16::MAX);
            let cursor_x = inner.x.saturating_add(offset);
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().add_modifier(Modifier::REVERSED));
            }
        }
    }
}
