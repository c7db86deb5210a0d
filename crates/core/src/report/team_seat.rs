//! Team/seat reconciliation
//!
//! Joins team memberships against the identity index and the seat index,
//! emitting one row per (team, membership) pair regardless of match success.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use ghreport_domain::types::report::TeamSeatRow;
use ghreport_domain::types::seat::SeatRecord;
use ghreport_domain::types::team::Team;
use serde_json::Value;

use crate::identity::IdentityIndex;

use super::activity::classify;

/// Ordered field paths a membership's login may live under.
const LOGIN_PATHS: [&[&str]; 3] = [&["user", "login"], &["member", "login"], &["login"]];

/// Extract a membership's login by trying each known path in order.
/// The first structurally valid, non-empty string wins.
pub fn membership_login(membership: &Value) -> Option<String> {
    for path in LOGIN_PATHS {
        let mut cur = membership;
        let mut ok = true;
        for segment in path {
            match cur.get(segment) {
                Some(next) => cur = next,
                None => {
                    ok = false;
                    break;
                }
            }
        }
        if !ok {
            continue;
        }
        if let Some(login) = cur.as_str() {
            let login = login.trim();
            if !login.is_empty() {
                return Some(login.to_string());
            }
        }
    }
    None
}

/// Join outcome counters for one team, used for progress logging.
#[derive(Debug, Default, Clone, Copy)]
pub struct JoinStats {
    pub rows: usize,
    pub unmatched_identity: usize,
}

/// Build the rows for one team's memberships.
///
/// Memberships without any extractable login are skipped. Unmatched identity
/// fields stay blank; a missing seat yields blank seat fields with
/// `copilot_assigned = "no"` and an `"inactive"` classification.
pub fn reconcile_team(
    enterprise: &str,
    team: &Team,
    memberships: &[Value],
    index: &IdentityIndex,
    seats: &HashMap<String, SeatRecord>,
    now: DateTime<Utc>,
) -> (Vec<TeamSeatRow>, JoinStats) {
    let team_name = team.report_name();
    let team_slug = team.report_slug().unwrap_or_default();

    let mut rows = Vec::new();
    let mut stats = JoinStats::default();

    for membership in memberships {
        let Some(login) = membership_login(membership) else {
            continue;
        };

        let identity = index.lookup(&login);
        if identity.is_none() {
            stats.unmatched_identity += 1;
        }

        let seat = seats.get(&login.to_lowercase());

        let (assigned, status, plan, last_activity, created, updated, active) = match seat {
            Some(seat) => (
                "yes",
                seat.status.clone().unwrap_or_default(),
                seat.plan_type.clone().unwrap_or_default(),
                seat.last_activity_at.clone().unwrap_or_default(),
                seat.created_at.clone().unwrap_or_default(),
                seat.updated_at.clone().unwrap_or_default(),
                classify(seat.last_activity_at.as_deref(), now),
            ),
            None => ("no", String::new(), String::new(), String::new(), String::new(), String::new(), "inactive"),
        };

        rows.push(TeamSeatRow {
            enterprise: enterprise.to_string(),
            team_name: team_name.clone(),
            team_slug: team_slug.clone(),
            login,
            name: identity.map(|r| r.name.clone()).unwrap_or_default(),
            email: identity.map(|r| r.email.clone()).unwrap_or_default(),
            scim_user_name: identity.map(|r| r.user_name.clone()).unwrap_or_default(),
            copilot_assigned: assigned.to_string(),
            copilot_status: status,
            plan_type: plan,
            last_activity_at: last_activity,
            active_status: active.to_string(),
            seat_created_at: created,
            seat_updated_at: updated,
        });
        stats.rows += 1;
    }

    (rows, stats)
}
