use crate::infrastructure::config::{ThemeConfig, ThemeMode};
use coolor::Rgb;
use ratatui::style::{Color, Modifier, Style};

/// Accent used when the configured one cannot be parsed.
const DEFAULT_ACCENT: Color = Color::Rgb(46, 125, 50);

/// Accent names accepted besides hex codes.
const NAMED_ACCENTS: &[(&str, (u8, u8, u8))] = &[
    ("green", (46, 125, 50)),
    ("teal", (0, 121, 107)),
    ("blue", (21, 101, 192)),
    ("indigo", (57, 73, 171)),
    ("purple", (106, 27, 154)),
    ("red", (198, 40, 40)),
    ("orange", (239, 108, 0)),
    ("amber", (255, 143, 0)),
    ("brown", (93, 64, 55)),
];

/// Colors and styles for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Light or dark.
    pub mode: ThemeMode,
    /// Brand color for titles, borders and ratings.
    pub accent: Color,
    /// Screen background.
    pub background: Color,
    /// Body text.
    pub text: Color,
    /// Secondary text.
    pub muted: Color,
    /// Open badge and success popups.
    pub success: Color,
    /// Closed badge and error popups.
    pub error: Color,
    /// Text on background.
    pub base_style: Style,
    /// Screen and card titles.
    pub title_style: Style,
    /// Highlighted list row.
    pub selection_style: Style,
    /// Hints, placeholders and disabled actions.
    pub dimmed_style: Style,
    /// Card and input borders.
    pub card_border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    /// Builds the theme from the `[theme]` config section.
    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::new(parse_color(&config.accent_color), config.mode)
    }

    /// Builds the theme for an accent and mode.
    #[must_use]
    pub fn new(accent: Color, mode: ThemeMode) -> Self {
        let (background, text, muted) = match mode {
            ThemeMode::Light => (Color::Rgb(250, 250, 250), Color::Rgb(33, 33, 33), Color::Gray),
            ThemeMode::Dark => (Color::Rgb(18, 18, 18), Color::Rgb(230, 230, 230), Color::DarkGray),
        };

        let selection_bg = match mode {
            ThemeMode::Light => accent_shade(accent, 0.85, 0.4),
            ThemeMode::Dark => accent_shade(accent, 0.2, 0.3),
        };

        let base_style = Style::default().fg(text).bg(background);

        Self {
            mode,
            accent,
            background,
            text,
            muted,
            success: Color::Green,
            error: Color::Red,
            base_style,
            title_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            selection_style: Style::default().bg(selection_bg).fg(text),
            dimmed_style: Style::default().fg(muted),
            card_border: Style::default().fg(accent),
        }
    }

    /// Accent hue at the given lightness and saturation, both in `0.0..=1.0`.
    #[must_use]
    pub fn shade(&self, lightness: f32, saturation: f32) -> Color {
        accent_shade(self.accent, lightness, saturation)
    }

    /// Returns the same accent in the other mode.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self::new(self.accent, self.mode.toggled())
    }

    /// Returns true in dark mode.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        matches!(self.mode, ThemeMode::Dark)
    }
}

fn accent_shade(accent: Color, lightness: f32, saturation: f32) -> Color {
    let Color::Rgb(r, g, b) = accent else {
        return accent;
    };
    let mut hsl = Rgb::new(r, g, b).to_hsl();
    hsl.l = lightness;
    hsl.s = saturation;
    let rgb = hsl.to_rgb();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Parses an accent name or hex code, falling back to the default green.
///
/// The result is always an RGB color so that shades can be derived from it.
#[must_use]
pub fn parse_color(s: &str) -> Color {
    let s = s.trim();
    if let Some((r, g, b)) = s.strip_prefix('#').and_then(parse_hex_color) {
        return Color::Rgb(r, g, b);
    }

    NAMED_ACCENTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map_or(DEFAULT_ACCENT, |&(_, (r, g, b))| Color::Rgb(r, g, b))
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    if !s.is_ascii() {
        return None;
    }

    match s.len() {
        6 => Some((
            u8::from_str_radix(&s[0..2], 16).ok()?,
            u8::from_str_radix(&s[2..4], 16).ok()?,
            u8::from_str_radix(&s[4..6], 16).ok()?,
        )),
        3 => {
            let digit = |i: usize| u8::from_str_radix(&s[i..=i], 16).map(|d| d * 17).ok();
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}
