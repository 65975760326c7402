use std::fmt::{Display, Write};

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Zone-less timestamps as emitted for `LocalDateTime` columns.
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// One pre-registered email, as returned by the admin listing endpoint.
///
/// The backend owns these records; the client never constructs or mutates
/// them outside of tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub id: String,
    pub email: String,
    pub created_at: String,
}

/// A parsed `created_at`.
enum CreatedAt {
    /// Carried an offset; a fixed point in time.
    Instant(DateTime<Utc>),
    /// No offset; a wall-clock reading in the viewer's zone.
    WallClock(NaiveDateTime),
}

impl RegistrationRecord {
    fn parse_created_at(&self) -> Option<CreatedAt> {
        let raw = self.created_at.trim();

        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(CreatedAt::Instant(parsed.with_timezone(&Utc)));
        }

        NaiveDateTime::parse_from_str(raw, NAIVE_TIMESTAMP_FORMAT)
            .ok()
            .map(CreatedAt::WallClock)
    }

    /// Parse `created_at` as an instant.
    ///
    /// Accepts RFC 3339 (`2024-01-01T00:00:00Z`) and zone-less date-times with
    /// optional fractional seconds, the latter read as local time.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        match self.parse_created_at()? {
            CreatedAt::Instant(instant) => Some(instant),
            CreatedAt::WallClock(naive) => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.with_timezone(&Utc)),
        }
    }

    /// Render `created_at` in `tz` using a strftime-style `pattern`.
    ///
    /// Instants are shifted into `tz`; zone-less values keep their wall-clock
    /// reading. Falls back to the raw string when the timestamp cannot be
    /// parsed, does not exist in `tz`, or the pattern cannot be rendered.
    pub fn format_created_at_in<Tz>(&self, tz: &Tz, pattern: &str) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let at = match self.parse_created_at() {
            Some(CreatedAt::Instant(instant)) => instant.with_timezone(tz),
            Some(CreatedAt::WallClock(naive)) => match tz.from_local_datetime(&naive).earliest() {
                Some(at) => at,
                None => return self.created_at.clone(),
            },
            None => return self.created_at.clone(),
        };

        let mut rendered = String::new();
        match write!(rendered, "{}", at.format(pattern)) {
            Ok(()) => rendered,
            Err(_) => self.created_at.clone(),
        }
    }

    /// Render `created_at` in the user's local time zone.
    pub fn format_created_at(&self, pattern: &str) -> String {
        self.format_created_at_in(&Local, pattern)
    }
}
