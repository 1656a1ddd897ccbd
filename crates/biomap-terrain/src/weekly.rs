//! Weekly seed rotation.
//!
//! A map seed is a server identifier joined with the date of the Monday that
//! starts the current week. The week boundary is shifted by a fixed offset so
//! the map rolls over at a chosen hour instead of UTC midnight. The clock is
//! read by the caller; nothing here looks at the current time.

use chrono::{DateTime, Datelike, Duration, Utc};

/// Default week-boundary shift: Monday 05:00 at UTC+9 is Monday 00:00 after
/// adding four hours to UTC.
pub const DEFAULT_ROTATION_OFFSET_HOURS: i64 = 4;

/// `YYYY-MM-DD` of the Monday of the week containing `now + offset_hours`.
pub fn weekly_key(now: DateTime<Utc>, offset_hours: i64) -> String {
    let shifted = now + Duration::hours(offset_hours);
    let days_since_monday = i64::from(shifted.weekday().num_days_from_monday());
    let monday = shifted.date_naive() - Duration::days(days_since_monday);
    monday.format("%Y-%m-%d").to_string()
}

/// Joins a server identifier and a weekly key into a map seed.
pub fn compose_seed(server_id: &str, weekly_key: &str) -> String {
    format!("{server_id}:{weekly_key}")
}

/// A map seed together with the parts it was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeeklySeed {
    /// Raw server identifier.
    pub server_id: String,
    /// `YYYY-MM-DD` of the week's Monday.
    pub week: String,
}

impl WeeklySeed {
    /// Builds the seed for the week containing `now`.
    pub fn at(server_id: impl Into<String>, now: DateTime<Utc>, offset_hours: i64) -> Self {
        Self {
            server_id: server_id.into(),
            week: weekly_key(now, offset_hours),
        }
    }

    /// The full seed string, `server_id:week`.
    pub fn seed(&self) -> String {
        compose_seed(&self.server_id, &self.week)
    }
}
