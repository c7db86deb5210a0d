//! Seat-by-login index

use std::collections::HashMap;

use ghreport_domain::types::seat::SeatRecord;
use tracing::debug;

/// Index seats by assignee login, keyed lowercase so lookups are
/// case-insensitive.
///
/// Insertion policy is last-write-wins: upstream guarantees one seat per
/// login, so a duplicate means a later page superseded an earlier one and
/// the later record is kept. Seats without a login are dropped.
pub fn seats_by_login(seats: Vec<SeatRecord>) -> HashMap<String, SeatRecord> {
    let mut by_login = HashMap::new();
    let total = seats.len();
    for seat in seats {
        let Some(login) = seat.login().map(str::to_lowercase) else {
            continue;
        };
        by_login.insert(login, seat);
    }
    debug!(seats = total, indexed = by_login.len(), "seat index built");
    by_login
}
