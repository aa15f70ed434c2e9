//! Sub-menu of service trades under "Servicios".

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::domain::Route;
use crate::domain::entities::ServiceKind;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{KeyHint, MenuList, MenuState};

/// Footer hints of the services menu.
pub const SERVICES_MENU_HINTS: &[KeyHint] = &[
    KeyHint::new("Elegir", "↑↓"),
    KeyHint::new("Ver empresas", "Enter"),
    KeyHint::new("Volver", "Esc"),
];

/// Outcome of a key press on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServicesMenuAction {
    /// Nothing for the app to do.
    None,
    /// Leave the menu.
    Back,
    /// Go to this route.
    Open(Route),
}

/// Menu of service trades.
pub struct ServicesMenuScreen {
    services: Vec<ServiceKind>,
    menu: MenuState,
}

impl ServicesMenuScreen {
    /// Creates the menu with the first trade selected.
    #[must_use]
    pub fn new(services: Vec<ServiceKind>) -> Self {
        Self {
            menu: MenuState::new(services.len()),
            services,
        }
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> ServicesMenuAction {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => return ServicesMenuAction::Back,
            KeyCode::Up | KeyCode::Char('k') => self.menu.previous(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.menu.next(),
            KeyCode::Enter => {
                if let Some(service) = self.menu.selected().and_then(|i| self.services.get(i)) {
                    return ServicesMenuAction::Open(Route::ServiceList {
                        category: service.name.clone(),
                    });
                }
            }
            _ => {}
        }
        ServicesMenuAction::None
    }
}

/// Draws a [`ServicesMenuScreen`].
pub struct ServicesMenuView<'a> {
    screen: &'a ServicesMenuScreen,
    theme: &'a Theme,
}

impl<'a> ServicesMenuView<'a> {
    /// Creates the view.
    #[must_use]
    pub const fn new(screen: &'a ServicesMenuScreen, theme: &'a Theme) -> Self {
        Self { screen, theme }
    }
}

impl Widget for ServicesMenuView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, content, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(50),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [title_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(3)]).areas(content);

        Paragraph::new(Line::styled("Servicios", self.theme.title_style))
            .centered()
            .render(title_area, buf);

        let mut state = self.screen.menu.clone();
        StatefulWidget::render(
            MenuList::new(
                self.screen.services.iter().map(|s| s.name.clone()),
                " ¿Qué servicio necesitas? ",
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
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_opens_service_list() {
        let mut screen = ServicesMenuScreen::new(vec![
            ServiceKind {
                id: "1".into(),
                name: "Cerrajería".into(),
            },
            ServiceKind {
                id: "2".into(),
                name: "Plomería".into(),
            },
        ]);

        screen.handle_key(key(KeyCode::Up));
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            ServicesMenuAction::Open(Route::ServiceList {
                category: "Plomería".into()
            })
        );
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), ServicesMenuAction::Back);
    }

    #[test]
    fn test_empty_menu_does_nothing_on_enter() {
        let mut screen = ServicesMenuScreen::new(vec![]);
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ServicesMenuAction::None);
    }
}
