use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// One key hint: what it does and which key does it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    /// What the key does.
    pub label: &'static str,
    /// Key to press.
    pub key: &'static str,
}

impl KeyHint {
    /// Creates a hint.
    #[must_use]
    pub const fn new(label: &'static str, key: &'static str) -> Self {
        Self { label, key }
    }
}

/// Styles derived from the theme.
pub struct FooterBarStyle {
    /// Bar background.
    pub background: Style,
    /// Hint label.
    pub label_style: Style,
    /// Key cap.
    pub key_style: Style,
    /// Right-aligned info.
    pub info: Style,
}

impl FooterBarStyle {
    /// Derives the key cap shade from the accent.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let key_bg = theme.shade(if theme.is_dark() { 0.08 } else { 0.9 }, 0.5);

        Self {
            background: Style::default().bg(theme.background),
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().bg(key_bg).fg(theme.text),
            info: theme.dimmed_style,
        }
    }
}

/// Bottom line listing the keys of the current screen.
pub struct FooterBar<'a> {
    hints: &'a [KeyHint],
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    /// Creates the footer for a hint set.
    #[must_use]
    pub fn new(hints: &'a [KeyHint], theme: &Theme) -> Self {
        Self {
            hints,
            right_info: None,
            style: FooterBarStyle::from_theme(theme),
        }
    }

    /// Sets text shown on the right.
    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    fn build_left_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {} ", hint.label), self.style.label_style));
            spans.push(Span::styled(format!(" {} ", hint.key), self.style.key_style));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let right_width = self
            .right_info
            .map_or(0, |s| u16::try_from(s.width()).unwrap_or(u16::MAX));
        let left_width = area.width.saturating_sub(right_width.saturating_add(1));

        let left_area = Rect::new(area.x, area.y, left_width, 1);
        Paragraph::new(Line::from(self.build_left_spans())).render(left_area, buf);

        if let Some(info) = self.right_info
            && right_width < area.width
        {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(Span::styled(info, self.style.info)).render(right_area, buf);
        }
    }
}
