use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::presentation::theme::Theme;

const LOGO_TEXT: &str = "
 ███████ ██ ███    ██ ██████  ███████ ██████   ██████  ██████  ██
 ██      ██ ████   ██ ██   ██ ██      ██   ██ ██      ██    ██ ██
 █████   ██ ██ ██  ██ ██   ██ █████   ██████  ██      ██    ██ ██
 ██      ██ ██  ██ ██ ██   ██ ██      ██   ██ ██      ██    ██ ██
 ██      ██ ██   ████ ██████  ███████ ██   ██  ██████  ██████  ███████";

const TAGLINE: &str = "Encuentra servicios cerca de ti";

#[derive(Default)]
struct LoadingState {
    data_ready: bool,
    animation_complete: bool,
    intro_finished: bool,
}

/// Animated logo shown at startup.
pub struct SplashScreen {
    intro_effect: Effect,
    outro_effect: Effect,
    state: LoadingState,
    pending_duration: Duration,
    theme: Theme,
}

impl SplashScreen {
    /// Creates the splash. Without animations it completes on the first tick.
    #[must_use]
    pub fn new(theme: Theme, animated: bool) -> Self {
        let intro_effect = fx::coalesce((800, Interpolation::CircOut));
        let outro_effect = fx::dissolve((600, Interpolation::CircIn));

        let state = if animated {
            LoadingState::default()
        } else {
            LoadingState {
                data_ready: true,
                animation_complete: true,
                intro_finished: true,
            }
        };

        Self {
            intro_effect,
            outro_effect,
            state,
            pending_duration: Duration::ZERO,
            theme,
        }
    }

    /// Queues elapsed time for the next render.
    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }

    /// Lets the outro start once the intro ends.
    pub fn set_data_ready(&mut self) {
        self.state.data_ready = true;
    }

    /// Ends the splash early on a key press.
    pub fn skip(&mut self) {
        self.state.intro_finished = true;
        self.state.data_ready = true;
        self.state.animation_complete = true;
    }

    /// Returns true once the outro has finished.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.state.animation_complete
    }
}

impl Widget for &mut SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut text = Text::from(LOGO_TEXT.trim_matches('\n'))
            .style(Style::default().fg(self.theme.accent))
            .centered();
        text.push_line(Line::default());
        text.push_line(Line::styled(TAGLINE, self.theme.dimmed_style).centered());

        let text_width = u16::try_from(text.width()).unwrap_or(0);
        let text_height = u16::try_from(text.height()).unwrap_or(0);

        let x = area.x + (area.width.saturating_sub(text_width)) / 2;
        let y = area.y + (area.height.saturating_sub(text_height)) / 2;
        let center_area = Rect::new(
            x,
            y,
            text_width.min(area.width),
            text_height.min(area.height),
        );

        Paragraph::new(text).render(center_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if !self.state.intro_finished {
            let overflow = self.intro_effect.process(duration.into(), buf, center_area);
            if overflow.is_some() {
                self.state.intro_finished = true;
            }
        } else if self.state.data_ready && !self.state.animation_complete {
            let overflow = self.outro_effect.process(duration.into(), buf, center_area);
            if overflow.is_some() {
                self.state.animation_complete = true;
            }
        }
    }
}
