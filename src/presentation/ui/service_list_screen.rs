//! Listings of one category with a live search box.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use tracing::trace;

use crate::domain::Route;
use crate::domain::entities::Service;
use crate::domain::services::ListingFilter;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{KeyHint, MenuList, MenuState, TextInput, TextInputView};

/// Footer hints of the listing screen.
pub const SERVICE_LIST_HINTS: &[KeyHint] = &[
    KeyHint::new("Buscar", "escribe"),
    KeyHint::new("Elegir", "↑↓"),
    KeyHint::new("Ver detalle", "Enter"),
    KeyHint::new("Volver", "Esc"),
];

/// Outcome of a key press on the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceListAction {
    /// Nothing for the app to do.
    None,
    /// Leave the listing.
    Back,
    /// Go to this route.
    Open(Route),
}

/// Listings of one category, filtered by the search box.
pub struct ServiceListScreen {
    category: String,
    listings: Vec<Service>,
    visible: Vec<Service>,
    search: TextInput,
    menu: MenuState,
}

impl ServiceListScreen {
    /// Creates the screen with an empty query.
    #[must_use]
    pub fn new(category: impl Into<String>, listings: Vec<Service>) -> Self {
        let mut search = TextInput::new(" Buscar ").placeholder("Nombre de la empresa");
        search.set_focused(true);
        Self {
            category: category.into(),
            menu: MenuState::new(listings.len()),
            visible: listings.clone(),
            listings,
            search,
        }
    }

    /// Listings matching the current query.
    #[must_use]
    pub fn visible(&self) -> &[Service] {
        &self.visible
    }

    fn refilter(&mut self) {
        self.visible = ListingFilter::filter(&self.listings, self.search.value());
        self.menu.set_len(self.visible.len());
        trace!(query = self.search.value(), matches = self.visible.len(), "Listings filtered");
    }

    /// Applies a key press. Letters edit the query.
    pub fn handle_key(&mut self, key: KeyEvent) -> ServiceListAction {
        match key.code {
            KeyCode::Esc => return ServiceListAction::Back,
            KeyCode::Backspace if self.search.value().is_empty() => {
                return ServiceListAction::Back;
            }
            KeyCode::Backspace => {
                self.search.backspace();
                self.refilter();
            }
            KeyCode::Delete => {
                self.search.delete();
                self.refilter();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.search.input_char(c);
                self.refilter();
            }
            KeyCode::Left => self.search.move_left(),
            KeyCode::Right => self.search.move_right(),
            KeyCode::Home => self.search.move_start(),
            KeyCode::End => self.search.move_end(),
            KeyCode::Up => self.menu.previous(),
            KeyCode::Down | KeyCode::Tab => self.menu.next(),
            KeyCode::Enter => {
                if let Some(listing) = self.menu.selected().and_then(|i| self.visible.get(i)) {
                    return ServiceListAction::Open(Route::CompanyDetail {
                        company_id: listing.id.clone(),
                    });
                }
            }
            _ => {}
        }
        ServiceListAction::None
    }
}

fn listing_line<'a>(listing: &'a Service, theme: &Theme) -> Line<'a> {
    let mut spans = vec![
        Span::styled(listing.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  ★ {:.1}", listing.rating), Style::default().fg(theme.accent)),
    ];
    if !listing.description.is_empty() {
        spans.push(Span::styled(
            format!("  {}", listing.description),
            theme.dimmed_style,
        ));
    }
    if let Some(promo) = &listing.promo {
        spans.push(Span::styled(
            format!("  [{promo}]"),
            Style::default().fg(theme.success).add_modifier(Modifier::ITALIC),
        ));
    }
    Line::from(spans)
}

/// Draws a [`ServiceListScreen`].
pub struct ServiceListView<'a> {
    screen: &'a ServiceListScreen,
    theme: &'a Theme,
}

impl<'a> ServiceListView<'a> {
    /// Creates the view.
    #[must_use]
    pub const fn new(screen: &'a ServiceListScreen, theme: &'a Theme) -> Self {
        Self { screen, theme }
    }
}

impl Widget for ServiceListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let screen = self.screen;
        let [title_area, search_area, list_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .areas(area);

        Paragraph::new(Line::styled(screen.category.as_str(), self.theme.title_style))
            .centered()
            .render(title_area, buf);

        TextInputView::new(&screen.search, self.theme).render(search_area, buf);

        if screen.visible.is_empty() {
            Paragraph::new(Line::styled(
                "No se encontraron empresas",
                self.theme.dimmed_style,
            ))
            .centered()
            .render(list_area, buf);
            return;
        }

        let title = format!(" {} resultados ", screen.visible.len());
        let mut state = screen.menu.clone();
        StatefulWidget::render(
            MenuList::new(
                screen.visible.iter().map(|s| listing_line(s, self.theme)),
                &title,
                self.theme,
            ),
            list_area,
            buf,
            &mut state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> ServiceListScreen {
        ServiceListScreen::new(
            "Cerrajería",
            vec![
                Service::new("1", "Cerrajería 24/7", "Cerrajería"),
                Service::new("2", "Cerrajería Express", "Cerrajería"),
                Service::new("4", "Llaves Rápidas", "Cerrajería"),
            ],
        )
    }

    fn type_text(screen: &mut ServiceListScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_filters_live() {
        let mut screen = screen();
        type_text(&mut screen, "EXPRESS");

        assert_eq!(screen.visible().len(), 1);
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            ServiceListAction::Open(Route::CompanyDetail {
                company_id: "2".into()
            })
        );
    }

    #[test]
    fn test_clearing_query_restores_all() {
        let mut screen = screen();
        type_text(&mut screen, "zz");
        assert!(screen.visible().is_empty());
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ServiceListAction::None);

        screen.handle_key(key(KeyCode::Backspace));
        screen.handle_key(key(KeyCode::Backspace));
        assert_eq!(screen.visible().len(), 3);
        assert_eq!(screen.search.value(), "");
    }

    #[test]
    fn test_modified_letters_do_not_search() {
        let mut screen = screen();
        screen.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::ALT));
        screen.handle_key(KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT));

        assert_eq!(screen.search.value(), "X");
        assert_eq!(screen.visible().len(), 1);
    }

    #[test]
    fn test_backspace_on_empty_goes_back() {
        let mut screen = screen();
        assert_eq!(screen.handle_key(key(KeyCode::Backspace)), ServiceListAction::Back);
    }

    #[test]
    fn test_selection_follows_shrinking_results() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Down));
        type_text(&mut screen, "cerraj");

        assert_eq!(screen.visible().len(), 2);
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            ServiceListAction::Open(Route::CompanyDetail {
                company_id: "2".into()
            })
        );
    }
}
