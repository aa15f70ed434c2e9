//! User type selection screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::UserType;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{KeyHint, MenuList, MenuState};

const CHOICES: [UserType; 2] = [UserType::Cliente, UserType::Empresa];

/// Footer hints of the user type choice.
pub const USER_TYPE_HINTS: &[KeyHint] = &[
    KeyHint::new("Elegir", "↑↓"),
    KeyHint::new("Continuar", "Enter"),
    KeyHint::new("Salir", "C-c"),
];

/// Outcome of a key press on the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTypeAction {
    /// Nothing for the app to do.
    None,
    /// Register as this type.
    Selected(UserType),
}

/// Client or company choice.
pub struct UserTypeScreen {
    menu: MenuState,
}

impl UserTypeScreen {
    /// Creates the screen with client selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            menu: MenuState::new(CHOICES.len()),
        }
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> UserTypeAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.menu.previous(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.menu.next(),
            KeyCode::Char('1') => return UserTypeAction::Selected(UserType::Cliente),
            KeyCode::Char('2') => return UserTypeAction::Selected(UserType::Empresa),
            KeyCode::Enter => {
                if let Some(choice) = self.menu.selected().and_then(|i| CHOICES.get(i)) {
                    return UserTypeAction::Selected(*choice);
                }
            }
            _ => {}
        }
        UserTypeAction::None
    }
}

impl Default for UserTypeScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws a [`UserTypeScreen`].
pub struct UserTypeView<'a> {
    screen: &'a UserTypeScreen,
    theme: &'a Theme,
}

impl<'a> UserTypeView<'a> {
    /// Creates the view.
    #[must_use]
    pub const fn new(screen: &'a UserTypeScreen, theme: &'a Theme) -> Self {
        Self { screen, theme }
    }
}

impl Widget for UserTypeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, center, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(8),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, content, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(40),
            Constraint::Fill(1),
        ])
        .areas(center);

        let [title_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(4)]).areas(content);

        Paragraph::new(Line::styled("¿Cómo deseas registrarte?", self.theme.title_style))
            .centered()
            .render(title_area, buf);

        let mut state = self.screen.menu.clone();
        StatefulWidget::render(
            MenuList::new(CHOICES.map(UserType::label), " Tipo de usuario ", self.theme),
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
    fn test_enter_selects_highlighted() {
        let mut screen = UserTypeScreen::new();
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            UserTypeAction::Selected(UserType::Cliente)
        );

        screen.handle_key(key(KeyCode::Down));
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            UserTypeAction::Selected(UserType::Empresa)
        );
    }

    #[test]
    fn test_shortcut_digits() {
        let mut screen = UserTypeScreen::new();
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('2'))),
            UserTypeAction::Selected(UserType::Empresa)
        );
        assert_eq!(screen.handle_key(key(KeyCode::Char('x'))), UserTypeAction::None);
    }
}
