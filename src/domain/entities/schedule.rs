//! Business opening hours.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

const TIME_FORMAT: &str = "%H:%M";

/// Daily opening hours of a business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Opening time, `HH:MM`.
    pub open: String,
    /// Closing time, `HH:MM`.
    pub close: String,
    /// Open around the clock; `open`/`close` are ignored.
    #[serde(default)]
    pub is_24_hours: bool,
}

impl Schedule {
    /// Creates a schedule with the given hours.
    #[must_use]
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            is_24_hours: false,
        }
    }

    /// Creates an always-open schedule.
    #[must_use]
    pub fn around_the_clock() -> Self {
        Self {
            open: "00:00".to_string(),
            close: "23:59".to_string(),
            is_24_hours: true,
        }
    }

    /// Returns whether the business is open at the given wall-clock time.
    ///
    /// The interval is half-open: `open <= now < close`. Unparseable hours
    /// count as closed.
    #[must_use]
    pub fn is_open_at(&self, now: NaiveTime) -> bool {
        if self.is_24_hours {
            return true;
        }

        let (Ok(open), Ok(close)) = (
            NaiveTime::parse_from_str(&self.open, TIME_FORMAT),
            NaiveTime::parse_from_str(&self.close, TIME_FORMAT),
        ) else {
            tracing::warn!(open = %self.open, close = %self.close, "Unparseable schedule");
            return false;
        };

        now >= open && now < close
    }

    /// Returns the hours label shown next to the open/closed badge.
    #[must_use]
    pub fn label(&self) -> String {
        if self.is_24_hours {
            "24 horas".to_string()
        } else {
            format!("{} - {}", self.open, self.close)
        }
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::around_the_clock()
    }
}
