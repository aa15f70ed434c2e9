//! Selectable list used by the menus.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::presentation::theme::Theme;

/// Cursor over a fixed number of entries, wrapping at both ends.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    len: usize,
    list_state: ListState,
}

impl MenuState {
    /// Creates a cursor on the first of `len` entries.
    #[must_use]
    pub fn new(len: usize) -> Self {
        let mut list_state = ListState::default();
        if len > 0 {
            list_state.select(Some(0));
        }
        Self { len, list_state }
    }

    /// Changes the entry count, keeping the cursor in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        match (len, self.list_state.selected()) {
            (0, _) => self.list_state.select(None),
            (_, Some(i)) if i >= len => self.list_state.select(Some(len - 1)),
            (_, None) => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    /// Index of the highlighted entry, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Moves down, wrapping to the top.
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        let next = self.selected().map_or(0, |i| (i + 1) % self.len);
        self.list_state.select(Some(next));
    }

    /// Moves up, wrapping to the bottom.
    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        let prev = self
            .selected()
            .map_or(0, |i| if i == 0 { self.len - 1 } else { i - 1 });
        self.list_state.select(Some(prev));
    }
}

/// Bordered list highlighting the selected entry.
pub struct MenuList<'a> {
    items: Vec<ListItem<'a>>,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> MenuList<'a> {
    /// Builds the list from anything convertible to lines.
    #[must_use]
    pub fn new<I, L>(items: I, title: &'a str, theme: &'a Theme) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Line<'a>>,
    {
        Self {
            items: items.into_iter().map(|l| ListItem::new(l.into())).collect(),
            title,
            theme,
        }
    }
}

impl StatefulWidget for MenuList<'_> {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.card_border)
            .title(self.title)
            .title_style(self.theme.title_style);

        let list = List::new(self.items)
            .block(block)
            .style(self.theme.base_style)
            .highlight_style(self.theme.selection_style.add_modifier(Modifier::BOLD))
            .highlight_symbol("› ");

        StatefulWidget::render(list, area, buf, &mut state.list_state);
    }
}

impl Widget for MenuList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut state = MenuState::new(0);
        StatefulWidget::render(self, area, buf, &mut state);
    }
}
