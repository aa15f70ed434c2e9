//! Business detail page.

use chrono::NaiveTime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use tracing::debug;

use crate::application::services::OpenStatusTicker;
use crate::domain::contact::{ContactUri, share_message};
use crate::domain::entities::CompanyProfile;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::KeyHint;

/// Footer hints of the detail page.
pub const COMPANY_DETAIL_HINTS: &[KeyHint] = &[
    KeyHint::new("Guardar", "s"),
    KeyHint::new("Compartir", "p"),
    KeyHint::new("Llamar", "c"),
    KeyHint::new("WhatsApp", "w"),
    KeyHint::new("Volver", "Esc"),
];

/// Outcome of a key press on the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyDetailAction {
    /// Nothing for the app to do.
    None,
    /// Leave the page.
    Back,
    /// Save or unsave this company id.
    ToggleSaved(String),
    /// Copy this share message.
    Share(String),
    /// Open this contact link.
    Contact(ContactUri),
}

/// Detail page of one company.
pub struct CompanyDetailScreen {
    profile: CompanyProfile,
    saved: bool,
    is_open: bool,
    ticker: Option<OpenStatusTicker>,
}

impl CompanyDetailScreen {
    /// Creates the page, computing the open badge for `now`.
    #[must_use]
    pub fn new(profile: CompanyProfile, saved: bool, now: NaiveTime) -> Self {
        let is_open = profile.schedule.is_open_at(now);
        Self {
            profile,
            saved,
            is_open,
            ticker: None,
        }
    }

    /// Updates the saved label.
    pub fn set_saved(&mut self, saved: bool) {
        self.saved = saved;
    }

    /// Open badge value.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Keeps the ticker alive for as long as this screen exists.
    pub fn attach_ticker(&mut self, ticker: OpenStatusTicker) {
        self.ticker = Some(ticker);
    }

    /// Recomputes the open flag. Returns true if it changed.
    pub fn refresh_open_status(&mut self, now: NaiveTime) -> bool {
        let is_open = self.profile.schedule.is_open_at(now);
        let changed = is_open != self.is_open;
        if changed {
            debug!(company_id = %self.profile.id, is_open, "Open status changed");
        }
        self.is_open = is_open;
        changed
    }

    /// Applies a key press. Call and WhatsApp need a number.
    pub fn handle_key(&mut self, key: KeyEvent) -> CompanyDetailAction {
        let profile = &self.profile;
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => CompanyDetailAction::Back,
            KeyCode::Char('s') => CompanyDetailAction::ToggleSaved(profile.id.clone()),
            KeyCode::Char('p') => {
                CompanyDetailAction::Share(share_message(&profile.name, &profile.id))
            }
            KeyCode::Char('c') if !profile.phone.is_empty() => {
                CompanyDetailAction::Contact(ContactUri::Call(profile.phone.clone()))
            }
            KeyCode::Char('w') if !profile.whatsapp.is_empty() => {
                CompanyDetailAction::Contact(ContactUri::WhatsApp(profile.whatsapp.clone()))
            }
            _ => CompanyDetailAction::None,
        }
    }
}

/// Draws a [`CompanyDetailScreen`].
pub struct CompanyDetailView<'a> {
    screen: &'a CompanyDetailScreen,
    theme: &'a Theme,
}

impl<'a> CompanyDetailView<'a> {
    /// Creates the view.
    #[must_use]
    pub const fn new(screen: &'a CompanyDetailScreen, theme: &'a Theme) -> Self {
        Self { screen, theme }
    }

    fn action_line(&self) -> Line<'static> {
        let profile = &self.screen.profile;
        let enabled = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);
        let disabled = self.theme.dimmed_style.add_modifier(Modifier::CROSSED_OUT);

        let saved_label = if self.screen.saved {
            "[★ Guardado]"
        } else {
            "[☆ Guardar]"
        };
        let call_style = if profile.phone.is_empty() { disabled } else { enabled };
        let whatsapp_style = if profile.whatsapp.is_empty() {
            disabled
        } else {
            enabled
        };

        Line::from(vec![
            Span::styled(saved_label, enabled),
            Span::raw("  "),
            Span::styled("[Compartir]", enabled),
            Span::raw("  "),
            Span::styled("[Llamar]", call_style),
            Span::raw("  "),
            Span::styled("[WhatsApp]", whatsapp_style),
        ])
    }
}

impl Widget for CompanyDetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let profile = &self.screen.profile;

        let [_, content, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(72),
            Constraint::Fill(1),
        ])
        .areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.card_border)
            .title(format!(" {} ", profile.name))
            .title_style(self.theme.title_style);
        let inner = block.inner(content);
        block.render(content, buf);

        let [status_area, description_area, gallery_area, actions_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(2),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        let (badge, badge_color) = if self.screen.is_open {
            ("Abierto", self.theme.success)
        } else {
            ("Cerrado", self.theme.error)
        };
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("★ {:.1}", profile.rating),
                Style::default().fg(self.theme.accent),
            ),
            Span::raw("  "),
            Span::styled(
                badge,
                Style::default().fg(badge_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", profile.schedule.label()), self.theme.dimmed_style),
        ]))
        .render(status_area, buf);

        Paragraph::new(profile.description.as_str())
            .style(Style::default().fg(self.theme.text))
            .wrap(Wrap { trim: true })
            .render(description_area, buf);

        let gallery = if profile.gallery.is_empty() {
            "Sin imágenes".to_string()
        } else {
            profile.gallery.join(" · ")
        };
        Paragraph::new(gallery)
            .style(self.theme.dimmed_style)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(self.theme.dimmed_style)
                    .title(" Galería "),
            )
            .wrap(Wrap { trim: true })
            .render(gallery_area, buf);

        Paragraph::new(self.action_line())
            .centered()
            .render(actions_area, buf);
    }
}
