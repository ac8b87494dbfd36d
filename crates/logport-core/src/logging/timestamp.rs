//! ISO-8601 timestamps for log lines

use chrono::{DateTime, SecondsFormat, Utc};

/// Format `at` as `2024-05-01T12:00:00.000Z`
pub fn iso8601(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The current time, formatted with [`iso8601`]
pub(crate) fn now() -> String {
    iso8601(&Utc::now())
}
