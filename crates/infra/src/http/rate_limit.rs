//! Proactive rate-limit gate
//!
//! The metrics/teams endpoints advertise the remaining request quota on
//! every response (`X-RateLimit-Remaining` / `X-RateLimit-Reset`). The gate
//! records those headers and, once the quota reads zero, holds the next
//! request until the advertised reset time plus a small margin.

use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use ghreport_domain::constants::RATE_RESET_MARGIN_SECS;
use reqwest::header::HeaderMap;
use tracing::warn;

pub const REMAINING_HEADER: &str = "X-RateLimit-Remaining";
pub const RESET_HEADER: &str = "X-RateLimit-Reset";

#[derive(Debug, Default)]
struct QuotaState {
    remaining: Option<u64>,
    reset_epoch: Option<u64>,
}

/// Tracks the most recent quota headers and gates requests on them.
#[derive(Debug, Default)]
pub struct RateLimitGate {
    state: Mutex<QuotaState>,
}

impl RateLimitGate {
    /// Record the quota headers from a response. Missing or non-numeric
    /// headers leave the previous reading in place.
    pub fn observe(&self, headers: &HeaderMap) {
        let remaining = header_u64(headers, REMAINING_HEADER);
        let reset = header_u64(headers, RESET_HEADER);

        if remaining.is_none() && reset.is_none() {
            return;
        }

        let Ok(mut state) = self.state.lock() else {
            return;
        };
        if remaining.is_some() {
            state.remaining = remaining;
        }
        if reset.is_some() {
            state.reset_epoch = reset;
        }
    }

    /// Sleep until the reset time plus margin when the recorded quota is
    /// exhausted. No-op otherwise.
    pub async fn wait_if_exhausted(&self) {
        let wait = self.pending_wait(unix_now());
        if let Some(wait) = wait {
            warn!(wait_secs = wait.as_secs(), "rate limit exhausted, sleeping until reset");
            tokio::time::sleep(wait).await;
            if let Ok(mut state) = self.state.lock() {
                // The window has rolled over; forget the stale reading.
                state.remaining = None;
                state.reset_epoch = None;
            }
        }
    }

    fn pending_wait(&self, now_epoch: u64) -> Option<Duration> {
        let state = self.state.lock().ok()?;
        if state.remaining? > 0 {
            return None;
        }
        let reset = state.reset_epoch.unwrap_or(0);
        let until_reset = reset.saturating_sub(now_epoch).max(1);
        Some(Duration::from_secs(until_reset + RATE_RESET_MARGIN_SECS))
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

fn unix_now() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs())
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    fn headers(remaining: &str, reset: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(REMAINING_HEADER, HeaderValue::from_str(remaining).unwrap());
        map.insert(RESET_HEADER, HeaderValue::from_str(reset).unwrap());
        map
    }

    #[test]
    fn no_wait_while_quota_remains() {
        let gate = RateLimitGate::default();
        gate.observe(&headers("42", "2000"));
        assert_eq!(gate.pending_wait(1000), None);
    }

    #[test]
    fn no_wait_before_any_observation() {
        let gate = RateLimitGate::default();
        assert_eq!(gate.pending_wait(1000), None);
    }

    #[test]
    fn exhausted_quota_waits_until_reset_plus_margin() {
        let gate = RateLimitGate::default();
        gate.observe(&headers("0", "1060"));
        assert_eq!(gate.pending_wait(1000), Some(Duration::from_secs(60 + RATE_RESET_MARGIN_SECS)));
    }

    #[test]
    fn reset_in_the_past_still_waits_a_beat() {
        let gate = RateLimitGate::default();
        gate.observe(&headers("0", "500"));
        assert_eq!(gate.pending_wait(1000), Some(Duration::from_secs(1 + RATE_RESET_MARGIN_SECS)));
    }

    #[test]
    fn malformed_headers_leave_previous_reading() {
        let gate = RateLimitGate::default();
        gate.observe(&headers("0", "1060"));

        let mut bad = HeaderMap::new();
        bad.insert(REMAINING_HEADER, HeaderValue::from_static("soon"));
        gate.observe(&bad);

        assert!(gate.pending_wait(1000).is_some());
    }

    #[tokio::test]
    async fn wait_is_noop_with_quota() {
        let gate = RateLimitGate::default();
        gate.observe(&headers("5", "0"));
        // Returns immediately; a hang here would time the test out.
        gate.wait_if_exhausted().await;
    }
}
