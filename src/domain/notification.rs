//! In-app popup messages.

use std::time::{Duration, Instant};

/// Outcome a popup reports. Picks the popup color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// A registration or save went through.
    Success,
    /// Neutral feedback such as "copied to clipboard".
    Info,
    /// A write or a hand-off to another application failed.
    Error,
}

/// A popup and the time it stays on screen once shown.
///
/// The countdown starts when the popup reaches the front of the queue, not
/// when it is created, so queued popups each get their full lifetime.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Outcome reported.
    pub level: NotificationLevel,
    /// Popup border title.
    pub title: String,
    /// Popup body.
    pub message: String,
    lifetime: Duration,
    shown_since: Option<Instant>,
}

impl Notification {
    /// Creates a popup that has not been shown yet.
    #[must_use]
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
        lifetime: Duration,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            lifetime,
            shown_since: None,
        }
    }

    /// Time on screen once shown.
    #[must_use]
    pub const fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Returns true once the countdown has started.
    #[must_use]
    pub const fn is_showing(&self) -> bool {
        self.shown_since.is_some()
    }

    /// Starts the countdown. Only the first call counts.
    pub fn show_at(&mut self, now: Instant) {
        self.shown_since.get_or_insert(now);
    }

    /// A popup that was never shown never expires.
    #[must_use]
    pub fn expired_at(&self, now: Instant) -> bool {
        self.shown_since
            .is_some_and(|since| now.saturating_duration_since(since) >= self.lifetime)
    }
}
