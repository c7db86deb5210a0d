//! Port interfaces between the report pipelines and the outside world
//!
//! The retrieval ports are implemented by the HTTP clients in
//! `ghreport-infra`; the sink is implemented by the CSV writer. Pipelines
//! depend only on these traits.

use async_trait::async_trait;
use ghreport_domain::types::metrics::UsageEntry;
use ghreport_domain::types::report::{MetricsRow, TeamSeatRow};
use ghreport_domain::types::seat::SeatRecord;
use ghreport_domain::types::team::Team;
use ghreport_domain::{Result, ScimUser};
use serde_json::Value;

/// Directory (SCIM) retrieval.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Fetch the full directory snapshot for the enterprise.
    async fn fetch_users(&self) -> Result<Vec<ScimUser>>;
}

/// Copilot billing seat retrieval.
#[async_trait]
pub trait SeatSource: Send + Sync {
    /// Fetch every billing seat for the enterprise.
    async fn fetch_seats(&self) -> Result<Vec<SeatRecord>>;
}

/// Enterprise team and membership retrieval.
#[async_trait]
pub trait TeamSource: Send + Sync {
    /// Fetch every team in the enterprise.
    async fn fetch_teams(&self) -> Result<Vec<Team>>;

    /// Fetch one team's memberships as raw records; the login field path
    /// varies, so extraction is the join engine's job.
    async fn fetch_memberships(&self, team_slug: &str) -> Result<Vec<Value>>;
}

/// Per-team usage-metrics retrieval.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Fetch one team's metrics entries. `Ok(None)` means the metrics
    /// endpoint reported the team absent (404), which callers treat as
    /// skip-and-continue rather than a run failure.
    async fn fetch_team_metrics(&self, team_slug: &str) -> Result<Option<Vec<UsageEntry>>>;
}

/// Ordered row sink; serialization is the implementor's concern.
pub trait ReportSink {
    fn write_team_seat(&mut self, row: &TeamSeatRow) -> Result<()>;
    fn write_metrics(&mut self, row: &MetricsRow) -> Result<()>;
    /// Flush buffered rows to the underlying medium.
    fn finish(&mut self) -> Result<()>;
}
