//! Category menu shown after registration.
//!
//! The header greets the user from the session provider; the body lists the
//! catalog categories. A popup lets the user pick their city.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, StatefulWidget, Widget},
};
use tracing::debug;

use crate::application::SessionState;
use crate::domain::Route;
use crate::domain::entities::{Category, CityChoice, UserType};
use crate::domain::errors::LOAD_FAILURE_MESSAGE;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{KeyHint, MenuList, MenuState, StatusBar, StatusLevel};

/// Footer hints of the main menu.
pub const MAIN_MENU_HINTS: &[KeyHint] = &[
    KeyHint::new("Abrir", "Enter"),
    KeyHint::new("Seleccionar Ciudad", "c"),
    KeyHint::new("Modo oscuro", "d"),
    KeyHint::new("Reintentar", "r"),
    KeyHint::new("Cerrar sesión", "l"),
];

/// Footer hints while the city picker is open.
pub const CITY_PICKER_HINTS: &[KeyHint] = &[
    KeyHint::new("Elegir", "↑↓"),
    KeyHint::new("Seleccionar", "Enter"),
    KeyHint::new("Cerrar", "Esc"),
];

/// Outcome of a key press on the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainMenuAction {
    /// Nothing for the app to do.
    None,
    /// Go to this route.
    Open(Route),
    /// Switch between light and dark mode.
    ToggleTheme,
    /// Drop the session and start over.
    Logout,
    /// Fetch the session again after a failure.
    Retry,
    /// Remember this city.
    CitySelected(String),
}

/// Category menu with the welcome header.
pub struct MainMenuScreen {
    user_type: UserType,
    categories: Vec<Category>,
    menu: MenuState,
    cities: Vec<CityChoice>,
    city_picker: Option<MenuState>,
    selected_city: Option<String>,
}

impl MainMenuScreen {
    /// Creates the menu.
    #[must_use]
    pub fn new(
        user_type: UserType,
        categories: Vec<Category>,
        cities: Vec<CityChoice>,
        selected_city: Option<String>,
    ) -> Self {
        Self {
            user_type,
            menu: MenuState::new(categories.len()),
            categories,
            cities,
            city_picker: None,
            selected_city,
        }
    }

    /// User type the menu was opened for.
    #[must_use]
    pub const fn user_type(&self) -> UserType {
        self.user_type
    }

    /// Returns true while the city picker is open.
    #[must_use]
    pub const fn is_picking_city(&self) -> bool {
        self.city_picker.is_some()
    }

    /// Footer hints for the current mode.
    #[must_use]
    pub fn hints(&self) -> &'static [KeyHint] {
        if self.is_picking_city() {
            CITY_PICKER_HINTS
        } else {
            MAIN_MENU_HINTS
        }
    }

    /// Applies a key press. Retry is offered only after a failed load.
    pub fn handle_key(&mut self, key: KeyEvent, session: &SessionState) -> MainMenuAction {
        if let Some(picker) = &mut self.city_picker {
            match key.code {
                KeyCode::Esc => self.city_picker = None,
                KeyCode::Up | KeyCode::Char('k') => picker.previous(),
                KeyCode::Down | KeyCode::Char('j') => picker.next(),
                KeyCode::Enter => {
                    let choice = picker.selected().and_then(|i| self.cities.get(i));
                    if let Some(choice) = choice {
                        let label = choice.to_string();
                        debug!(city = %label, "City selected");
                        self.selected_city = Some(label.clone());
                        self.city_picker = None;
                        return MainMenuAction::CitySelected(label);
                    }
                }
                _ => {}
            }
            return MainMenuAction::None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.menu.previous(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.menu.next(),
            KeyCode::Enter => {
                if let Some(category) = self.menu.selected().and_then(|i| self.categories.get(i)) {
                    return MainMenuAction::Open(Route::for_category(category));
                }
            }
            KeyCode::Char('c') if !self.cities.is_empty() => {
                let mut picker = MenuState::new(self.cities.len());
                let current = self
                    .selected_city
                    .as_ref()
                    .and_then(|label| self.cities.iter().position(|c| &c.to_string() == label));
                for _ in 0..current.unwrap_or(0) {
                    picker.next();
                }
                self.city_picker = Some(picker);
            }
            KeyCode::Char('d') => return MainMenuAction::ToggleTheme,
            KeyCode::Char('l') => return MainMenuAction::Logout,
            KeyCode::Char('r') if matches!(session, SessionState::Error(_)) => {
                return MainMenuAction::Retry;
            }
            _ => {}
        }
        MainMenuAction::None
    }
}

/// Draws a [`MainMenuScreen`] with the session header.
pub struct MainMenuView<'a> {
    screen: &'a MainMenuScreen,
    session: &'a SessionState,
    theme: &'a Theme,
}

impl<'a> MainMenuView<'a> {
    /// Creates the view.
    #[must_use]
    pub const fn new(screen: &'a MainMenuScreen, session: &'a SessionState, theme: &'a Theme) -> Self {
        Self {
            screen,
            session,
            theme,
        }
    }

    fn header(&self) -> StatusBar {
        let (center, level) = match self.session {
            SessionState::Loading => ("Cargando...".to_string(), StatusLevel::Loading),
            SessionState::Ready(session) => (session.welcome(), StatusLevel::Info),
            SessionState::Error(_) => (LOAD_FAILURE_MESSAGE.to_string(), StatusLevel::Error),
        };
        let city = self
            .screen
            .selected_city
            .clone()
            .unwrap_or_else(|| "Seleccionar Ciudad".to_string());

        StatusBar::new()
            .left(" FINDERCOL")
            .center(center)
            .right(format!("{city} "))
            .level(level)
    }

    fn render_city_picker(&self, picker: &MenuState, area: Rect, buf: &mut Buffer) {
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Percentage(70),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, popup, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(48),
            Constraint::Fill(1),
        ])
        .areas(middle);

        Clear.render(popup, buf);
        let mut state = picker.clone();
        StatefulWidget::render(
            MenuList::new(
                self.screen.cities.iter().map(ToString::to_string),
                " Selecciona tu ciudad ",
                self.theme,
            ),
            popup,
            buf,
            &mut state,
        );
    }
}

impl Widget for MainMenuView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, _, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .areas(area);

        self.header().themed(self.theme).render(header_area, buf);

        let [_, content, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(50),
            Constraint::Fill(1),
        ])
        .areas(body_area);

        let [title_area, list_area, retry_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(content);

        Paragraph::new(Line::styled("¿Qué estás buscando?", self.theme.title_style))
            .centered()
            .render(title_area, buf);

        let mut state = self.screen.menu.clone();
        StatefulWidget::render(
            MenuList::new(
                self.screen.categories.iter().map(|c| c.name.clone()),
                " Categorías ",
                self.theme,
            ),
            list_area,
            buf,
            &mut state,
        );

        if matches!(self.session, SessionState::Error(_)) {
            Paragraph::new(Line::from(vec![
                Span::styled("Presiona ", self.theme.dimmed_style),
                Span::styled("r", self.theme.title_style.add_modifier(Modifier::UNDERLINED)),
                Span::styled(" para reintentar", self.theme.dimmed_style),
            ]))
            .centered()
            .render(retry_area, buf);
        }

        if let Some(picker) = &self.screen.city_picker {
            self.render_city_picker(picker, area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UserSession;
    use crate::domain::errors::LoadError;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> MainMenuScreen {
        MainMenuScreen::new(
            UserType::Cliente,
            vec![
                Category {
                    id: "1".into(),
                    name: "Servicios".into(),
                    has_subservices: true,
                },
                Category {
                    id: "2".into(),
                    name: "Restaurantes".into(),
                    has_subservices: false,
                },
            ],
            vec![
                CityChoice {
                    city: "Medellín".into(),
                    department: "Antioquia".into(),
                },
                CityChoice {
                    city: "Bogotá".into(),
                    department: "Cundinamarca".into(),
                },
            ],
            None,
        )
    }

    fn ready() -> SessionState {
        SessionState::Ready(UserSession::new(UserType::Cliente, "Ana"))
    }

    #[test]
    fn test_enter_opens_category_route() {
        let mut screen = screen();
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &ready()),
            MainMenuAction::Open(Route::ServicesMenu)
        );

        screen.handle_key(key(KeyCode::Down), &ready());
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &ready()),
            MainMenuAction::Open(Route::ServiceList {
                category: "Restaurantes".into()
            })
        );
    }

    #[test]
    fn test_retry_only_after_error() {
        let mut screen = screen();
        assert_eq!(screen.handle_key(key(KeyCode::Char('r')), &ready()), MainMenuAction::None);
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('r')), &SessionState::Loading),
            MainMenuAction::None
        );

        let failed = SessionState::Error(LoadError::storage("disk"));
        assert_eq!(screen.handle_key(key(KeyCode::Char('r')), &failed), MainMenuAction::Retry);
    }

    #[test]
    fn test_city_picker_selects_and_closes() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Char('c')), &ready());
        assert!(screen.is_picking_city());
        assert_eq!(screen.hints(), CITY_PICKER_HINTS);

        screen.handle_key(key(KeyCode::Down), &ready());
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &ready()),
            MainMenuAction::CitySelected("Bogotá (Cundinamarca)".into())
        );
        assert!(!screen.is_picking_city());
        assert_eq!(screen.selected_city.as_deref(), Some("Bogotá (Cundinamarca)"));
    }

    #[test]
    fn test_picker_swallows_menu_keys() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Char('c')), &ready());

        assert_eq!(screen.handle_key(key(KeyCode::Char('l')), &ready()), MainMenuAction::None);
        screen.handle_key(key(KeyCode::Esc), &ready());
        assert_eq!(screen.handle_key(key(KeyCode::Char('l')), &ready()), MainMenuAction::Logout);
    }

    #[test]
    fn test_header_shows_welcome() {
        let screen = screen();
        let theme = Theme::default();
        let session = ready();
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);

        MainMenuView::new(&screen, &session, &theme).render(area, &mut buf);

        let header: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(header.contains("Bienvenido, Ana"));
    }
}
