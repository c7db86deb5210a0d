//! Seat activity classification

use chrono::{DateTime, Duration, Utc};
use ghreport_domain::constants::ACTIVITY_WINDOW_DAYS;

/// Classify a seat's last-activity timestamp against `now`.
///
/// `"active"` when the timestamp parses as RFC 3339 and lies within the
/// 30-day window (inclusive); `"inactive"` otherwise, including missing,
/// blank, or malformed timestamps. Timestamps in the future count as active.
pub fn classify(last_activity_at: Option<&str>, now: DateTime<Utc>) -> &'static str {
    let Some(raw) = last_activity_at.map(str::trim).filter(|s| !s.is_empty()) else {
        return "inactive";
    };

    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => {
            if now.signed_duration_since(ts.with_timezone(&Utc))
                <= Duration::days(ACTIVITY_WINDOW_DAYS)
            {
                "active"
            } else {
                "inactive"
            }
        }
        Err(_) => "inactive",
    }
}
