//! Token expiration policy

use chrono::Utc;
use serde::{Deserialize, Serialize};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Maximum allowed token age.
///
/// The age is the sum of all four units. Unspecified units are zero, not
/// "use the default": `MaxAge::hours(1)` means exactly one hour, never one
/// day plus one hour. The default policy is one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct MaxAge {
    #[serde(default)]
    pub days: i64,
    #[serde(default)]
    pub hours: i64,
    #[serde(default)]
    pub minutes: i64,
    #[serde(default)]
    pub seconds: i64,
}

impl Default for MaxAge {
    fn default() -> Self {
        Self::days(1)
    }
}

impl MaxAge {
    /// An age of exactly `days` days
    pub fn days(days: i64) -> Self {
        Self {
            days,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// An age of exactly `hours` hours
    pub fn hours(hours: i64) -> Self {
        Self {
            days: 0,
            hours,
            minutes: 0,
            seconds: 0,
        }
    }

    /// An age of exactly `minutes` minutes
    pub fn minutes(minutes: i64) -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes,
            seconds: 0,
        }
    }

    /// An age of exactly `seconds` seconds
    pub fn seconds(seconds: i64) -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds,
        }
    }

    /// Total age in milliseconds
    pub fn as_millis(&self) -> i64 {
        self.days * MILLIS_PER_DAY
            + self.hours * MILLIS_PER_HOUR
            + self.minutes * MILLIS_PER_MINUTE
            + self.seconds * MILLIS_PER_SECOND
    }

    /// Whether a token issued at `issued_at_millis` has outlived this age.
    ///
    /// Reads the wall clock at the moment of the call; nothing is cached.
    pub fn is_expired(&self, issued_at_millis: i64) -> bool {
        self.is_expired_at(issued_at_millis, Utc::now().timestamp_millis())
    }

    /// Expiration check against an explicit clock reading.
    ///
    /// A token is expired iff it was issued strictly more than the
    /// allowed age before `now_millis`.
    pub fn is_expired_at(&self, issued_at_millis: i64, now_millis: i64) -> bool {
        now_millis - issued_at_millis > self.as_millis()
    }
}
