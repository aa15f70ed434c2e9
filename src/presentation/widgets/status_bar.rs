//! Header line with app name, greeting and selected city.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::presentation::theme::Theme;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Regular content.
    Info,
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self, theme: &Theme) -> Color {
        match self {
            Self::Info => theme.accent,
            Self::Loading => theme.muted,
            Self::Error => theme.error,
        }
    }
}

/// Three-part status line.
#[derive(Debug, Clone)]
pub struct StatusBar {
    left: String,
    center: String,
    right: String,
    level: StatusLevel,
}

impl StatusBar {
    /// Creates an empty bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left: String::new(),
            center: String::new(),
            right: String::new(),
            level: StatusLevel::Info,
        }
    }

    /// Sets the left text.
    #[must_use]
    pub fn left(mut self, content: impl Into<String>) -> Self {
        self.left = content.into();
        self
    }

    /// Sets the centered text.
    #[must_use]
    pub fn center(mut self, content: impl Into<String>) -> Self {
        self.center = content.into();
        self
    }

    /// Sets the right text.
    #[must_use]
    pub fn right(mut self, content: impl Into<String>) -> Self {
        self.right = content.into();
        self
    }

    /// Sets the color level.
    #[must_use]
    pub const fn level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }

    /// Binds the bar to a theme for rendering.
    #[must_use]
    pub const fn themed<'a>(&'a self, theme: &'a Theme) -> StatusBarView<'a> {
        StatusBarView { bar: self, theme }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`StatusBar`] bound to a theme.
pub struct StatusBarView<'a> {
    bar: &'a StatusBar,
    theme: &'a Theme,
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar = self.bar;
        let brand = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);
        let style = Style::default()
            .fg(bar.level.color(self.theme))
            .add_modifier(Modifier::BOLD);

        let width = area.width as usize;

        let left_len = bar.left.width();
        let center_len = bar.center.width();
        let right_len = bar.right.width();

        let center_start = width.saturating_sub(center_len) / 2;
        let right_start = width.saturating_sub(right_len);

        let mut spans = vec![Span::styled(bar.left.as_str(), brand)];

        let left_padding = center_start.saturating_sub(left_len);
        if left_padding > 0 {
            spans.push(Span::raw(" ".repeat(left_padding)));
        }

        if !bar.center.is_empty() {
            spans.push(Span::styled(bar.center.as_str(), style));
        }

        let current_len = left_len + left_padding + center_len;
        let right_padding = right_start.saturating_sub(current_len);
        if right_padding > 0 {
            spans.push(Span::raw(" ".repeat(right_padding)));
        }

        if !bar.right.is_empty() {
            spans.push(Span::styled(bar.right.as_str(), self.theme.dimmed_style));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.base_style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_parts_positioned() {
        let bar = StatusBar::new()
            .left("FINDERCOL")
            .center("Bienvenido, Ana")
            .right("Bogotá (Cundinamarca)");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);

        bar.themed(&theme).render(area, &mut buf);

        let line: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(line.starts_with("FINDERCOL"));
        assert!(line.contains("Bienvenido, Ana"));
        assert!(line.ends_with("Bogotá (Cundinamarca)"));
    }
}
