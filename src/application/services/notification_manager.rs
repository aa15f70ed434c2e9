use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::domain::{Notification, NotificationLevel};

/// Queue of popups shown one at a time.
#[derive(Debug)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    default_duration: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(4))
    }
}

impl NotificationManager {
    /// Creates an empty queue whose popups last `default_duration`.
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
        }
    }

    /// Queues a popup behind any already waiting.
    pub fn notify(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.queue.push_back(Notification::new(
            level,
            title,
            message,
            self.default_duration,
        ));
    }

    /// Queues a success popup.
    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Success, title, message);
    }

    /// Queues an info popup.
    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, title, message);
    }

    /// Queues an error popup.
    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, title, message);
    }

    /// Advances the front popup, starting the next once it expires.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        let Some(front) = self.queue.front_mut() else {
            return;
        };
        front.show_at(now);
        if front.expired_at(now) {
            self.queue.pop_front();
            if let Some(next) = self.queue.front_mut() {
                next.show_at(now);
            }
        }
    }

    /// Dismisses the popup currently shown.
    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }

    /// Popup currently on screen.
    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.queue.front()
    }

    /// Returns true while any popup is queued.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.queue.is_empty()
    }
}
