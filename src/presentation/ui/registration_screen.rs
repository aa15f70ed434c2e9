//! Registration form screen for clients and companies.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tracing::{debug, warn};

use crate::application::dto::RegistrationRequest;
use crate::application::services::{ClientField, CompanyField, FormField, RegistrationForm};
use crate::domain::entities::UserType;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{KeyHint, TextInput, TextInputView};

const INPUT_HEIGHT: u16 = 3;

/// Footer hints of the registration form.
pub const REGISTRATION_HINTS: &[KeyHint] = &[
    KeyHint::new("Campo", "Tab"),
    KeyHint::new("Registrar", "Enter"),
    KeyHint::new("Tipo", "←→"),
    KeyHint::new("Agregar teléfono", "C-n"),
    KeyHint::new("Volver", "Esc"),
];

/// Which form attribute an input edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Field(&'static str),
    Type,
    Phone(usize),
}

/// Outcome of a key press on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationAction {
    /// Nothing for the app to do.
    None,
    /// Leave the form.
    Back,
    /// Write this request.
    Submit(RegistrationRequest),
}

/// Registration form for one user type.
pub struct RegistrationScreen {
    form: RegistrationForm,
    inputs: Vec<(Slot, TextInput)>,
    focus: usize,
    submitting: bool,
    type_options: Vec<String>,
    type_index: Option<usize>,
}

impl RegistrationScreen {
    /// Creates an empty form. `type_options` feeds the company type picker.
    #[must_use]
    pub fn new(user_type: UserType, type_options: Vec<String>) -> Self {
        let inputs = match user_type {
            UserType::Cliente => ClientField::ALL
                .iter()
                .map(|f| (Slot::Field(f.key()), Self::input_for(*f)))
                .collect(),
            UserType::Empresa => {
                let mut inputs: Vec<_> = CompanyField::ALL
                    .iter()
                    .map(|f| {
                        let slot = if *f == CompanyField::Type {
                            Slot::Type
                        } else {
                            Slot::Field(f.key())
                        };
                        (slot, Self::input_for(*f))
                    })
                    .collect();
                inputs.push((Slot::Phone(0), Self::phone_input(0)));
                inputs
            }
        };

        let mut screen = Self {
            form: RegistrationForm::new(user_type),
            inputs,
            focus: 0,
            submitting: false,
            type_options,
            type_index: None,
        };
        screen.sync_focus();
        screen
    }

    fn input_for<F: FormField>(field: F) -> TextInput {
        let input = TextInput::new(format!(" {} ", field.label()));
        if field.is_secret() { input.masked() } else { input }
    }

    fn phone_input(index: usize) -> TextInput {
        TextInput::new(format!(" Teléfono adicional {} ", index + 1))
    }

    /// User type being registered.
    #[must_use]
    pub const fn user_type(&self) -> UserType {
        self.form.user_type()
    }

    /// Returns the current form snapshot.
    #[must_use]
    pub const fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// Returns true while a write is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Re-enables editing after a failed write. The form is kept as it was.
    pub fn submission_failed(&mut self) {
        self.submitting = false;
    }

    fn sync_focus(&mut self) {
        let focus = self.focus;
        for (i, (_, input)) in self.inputs.iter_mut().enumerate() {
            input.set_focused(i == focus);
        }
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.inputs.len();
        self.sync_focus();
    }

    fn focus_previous(&mut self) {
        self.focus = self.focus.checked_sub(1).unwrap_or(self.inputs.len() - 1);
        self.sync_focus();
    }

    fn focused_slot(&self) -> Option<Slot> {
        self.inputs.get(self.focus).map(|(slot, _)| *slot)
    }

    /// Writes the focused input's value into the form.
    fn commit_focused(&mut self) {
        let Some((slot, input)) = self.inputs.get(self.focus) else {
            return;
        };
        let value = input.value().to_string();

        let updated = match (*slot, &self.form) {
            (Slot::Field(name), form) => form.set_field_by_name(name, value),
            (Slot::Type, form) => form.set_field_by_name(CompanyField::Type.key(), value),
            (Slot::Phone(index), RegistrationForm::Company(form)) => form
                .set_phone(index, value)
                .map(RegistrationForm::Company),
            (Slot::Phone(_), RegistrationForm::Client(_)) => return,
        };

        match updated {
            Ok(form) => self.form = form,
            Err(e) => warn!(error = %e, "Ignoring edit"),
        }
    }

    fn append_phone(&mut self) {
        let RegistrationForm::Company(form) = &self.form else {
            return;
        };
        let form = form.append_phone();
        let index = form.phones().len() - 1;
        self.form = RegistrationForm::Company(form);
        self.inputs.push((Slot::Phone(index), Self::phone_input(index)));
        self.focus = self.inputs.len() - 1;
        self.sync_focus();
        debug!(slots = index + 1, "Phone slot added");
    }

    fn cycle_type(&mut self, forward: bool) {
        if self.type_options.is_empty() {
            return;
        }
        let len = self.type_options.len();
        let next = match (self.type_index, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.type_index = Some(next);
        if let Some((_, input)) = self.inputs.get_mut(self.focus) {
            input.set_value(self.type_options[next].clone());
        }
        self.commit_focused();
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> RegistrationAction {
        if self.submitting {
            return RegistrationAction::None;
        }

        let on_type = self.focused_slot() == Some(Slot::Type);

        match key.code {
            KeyCode::Esc => return RegistrationAction::Back,
            KeyCode::Enter => {
                self.submitting = true;
                let request = RegistrationRequest::new(
                    self.form.to_record(),
                    self.form.submission_key().clone(),
                );
                return RegistrationAction::Submit(request);
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.append_phone();
            }
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Left if on_type => self.cycle_type(false),
            KeyCode::Right if on_type => self.cycle_type(true),
            KeyCode::Char(c)
                if !on_type
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some((_, input)) = self.inputs.get_mut(self.focus) {
                    input.input_char(c);
                }
                self.commit_focused();
            }
            KeyCode::Backspace if !on_type => {
                if let Some((_, input)) = self.inputs.get_mut(self.focus) {
                    input.backspace();
                }
                self.commit_focused();
            }
            KeyCode::Delete if !on_type => {
                if let Some((_, input)) = self.inputs.get_mut(self.focus) {
                    input.delete();
                }
                self.commit_focused();
            }
            KeyCode::Left => self.with_focused(TextInput::move_left),
            KeyCode::Right => self.with_focused(TextInput::move_right),
            KeyCode::Home => self.with_focused(TextInput::move_start),
            KeyCode::End => self.with_focused(TextInput::move_end),
            _ => {}
        }

        RegistrationAction::None
    }

    fn with_focused(&mut self, f: impl FnOnce(&mut TextInput)) {
        if let Some((_, input)) = self.inputs.get_mut(self.focus) {
            f(input);
        }
    }
}

/// Draws a [`RegistrationScreen`].
pub struct RegistrationView<'a> {
    screen: &'a RegistrationScreen,
    theme: &'a Theme,
}

impl<'a> RegistrationView<'a> {
    /// Creates the view.
    #[must_use]
    pub const fn new(screen: &'a RegistrationScreen, theme: &'a Theme) -> Self {
        Self { screen, theme }
    }
}

impl Widget for RegistrationView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let screen = self.screen;
        let title = match screen.user_type() {
            UserType::Cliente => " Registro de Cliente ",
            UserType::Empresa => " Registro de Empresa ",
        };

        let [_, content, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(72),
            Constraint::Fill(1),
        ])
        .areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.card_border)
            .title(title)
            .title_style(self.theme.title_style);
        let inner = block.inner(content);
        block.render(content, buf);

        let [fields_area, status_area] =
            Layout::vertical([Constraint::Min(INPUT_HEIGHT), Constraint::Length(1)]).areas(inner);

        let visible = usize::from((fields_area.height / INPUT_HEIGHT).max(1));
        let start = screen.focus.saturating_sub(visible - 1);

        for (row, (_, input)) in screen.inputs.iter().skip(start).take(visible).enumerate() {
            let offset = u16::try_from(row).unwrap_or(0) * INPUT_HEIGHT;
            let slot_area = Rect::new(
                fields_area.x,
                fields_area.y + offset,
                fields_area.width,
                INPUT_HEIGHT,
            );
            TextInputView::new(input, self.theme).render(slot_area, buf);
        }

        let status = if screen.submitting {
            Line::from(Span::styled(
                "Registrando...",
                self.theme.dimmed_style.add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(Span::styled(
                format!("Campo {} de {}", screen.focus + 1, screen.inputs.len()),
                self.theme.dimmed_style,
            ))
        };
        Paragraph::new(status).render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RegistrationRecord;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut RegistrationScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn categories() -> Vec<String> {
        vec!["Servicios".into(), "Restaurantes".into()]
    }

    #[test]
    fn test_control_and_alt_letters_are_not_typed() {
        let mut screen = RegistrationScreen::new(UserType::Cliente, vec![]);
        type_text(&mut screen, "Ana");
        screen.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        screen.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        screen.handle_key(KeyEvent::new(KeyCode::Char('Z'), KeyModifiers::SHIFT));

        let RegistrationAction::Submit(request) = screen.handle_key(key(KeyCode::Enter)) else {
            panic!("expected submit");
        };
        let RegistrationRecord::Client(record) = request.record else {
            panic!("expected client record");
        };
        assert_eq!(record.name, "AnaZ");
    }

    #[test]
    fn test_client_form_fills_record() {
        let mut screen = RegistrationScreen::new(UserType::Cliente, vec![]);
        type_text(&mut screen, "Ana");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "a@x.com");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "3000000000");

        let RegistrationAction::Submit(request) = screen.handle_key(key(KeyCode::Enter)) else {
            panic!("expected submit");
        };

        let RegistrationRecord::Client(record) = request.record else {
            panic!("expected client record");
        };
        assert_eq!(record.name, "Ana");
        assert_eq!(record.email, "a@x.com");
        assert_eq!(record.phone, "3000000000");
        assert_eq!(&request.key, screen.form().submission_key());
    }

    #[test]
    fn test_input_ignored_while_submitting() {
        let mut screen = RegistrationScreen::new(UserType::Cliente, vec![]);
        type_text(&mut screen, "Ana");
        screen.handle_key(key(KeyCode::Enter));
        assert!(screen.is_submitting());

        let before = screen.form().clone();
        type_text(&mut screen, "zzz");
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), RegistrationAction::None);
        assert_eq!(screen.form(), &before);
    }

    #[test]
    fn test_failed_submission_keeps_form_and_key() {
        let mut screen = RegistrationScreen::new(UserType::Cliente, vec![]);
        type_text(&mut screen, "Ana");
        let RegistrationAction::Submit(first) = screen.handle_key(key(KeyCode::Enter)) else {
            panic!("expected submit");
        };
        let before = screen.form().clone();

        screen.submission_failed();
        assert_eq!(screen.form(), &before);

        let RegistrationAction::Submit(second) = screen.handle_key(key(KeyCode::Enter)) else {
            panic!("expected submit");
        };
        assert_eq!(first.key, second.key);
        assert_eq!(first.record, second.record);
    }

    #[test]
    fn test_company_type_picker_and_phones() {
        let mut screen = RegistrationScreen::new(UserType::Empresa, categories());
        type_text(&mut screen, "Llaves Rápidas");

        // Name, Nit, Email, PhoneFixed, PhoneCell, Address -> Type
        for _ in 0..6 {
            screen.handle_key(key(KeyCode::Tab));
        }
        type_text(&mut screen, "ignored");
        screen.handle_key(key(KeyCode::Right));
        screen.handle_key(key(KeyCode::Right));
        screen.handle_key(key(KeyCode::Left));

        screen.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        type_text(&mut screen, "3001112233");

        let RegistrationAction::Submit(request) = screen.handle_key(key(KeyCode::Enter)) else {
            panic!("expected submit");
        };
        let RegistrationRecord::Company(record) = request.record else {
            panic!("expected company record");
        };
        assert_eq!(record.name, "Llaves Rápidas");
        assert_eq!(record.kind, "Servicios");
        assert_eq!(record.address, None);
        assert_eq!(record.telefonos, ["", "3001112233"]);
    }

    #[test]
    fn test_nit_input_is_masked() {
        let screen = RegistrationScreen::new(UserType::Empresa, categories());
        let (_, nit) = &screen.inputs[1];
        assert_eq!(nit, &TextInput::new(format!(" {} ", CompanyField::Nit.label())).masked());
    }

    #[test]
    fn test_escape_goes_back() {
        let mut screen = RegistrationScreen::new(UserType::Cliente, vec![]);
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), RegistrationAction::Back);
    }
}
