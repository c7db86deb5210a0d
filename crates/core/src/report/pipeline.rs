//! Report pipelines
//!
//! Orchestrate the retrieval ports and the pure join/flatten logic. All
//! awaits are strictly sequential: the identity and seat indexes are fully
//! built before any join, and rows reach the sink in retrieval order.

use chrono::{DateTime, Utc};
use ghreport_domain::Result;
use tracing::{info, warn};

use crate::identity::{derive_suffix_token, IdentityIndex};
use crate::ports::{DirectorySource, MetricsSource, ReportSink, SeatSource, TeamSource};

use super::metrics::flatten_entry;
use super::seat_index::seats_by_login;
use super::team_seat::reconcile_team;

/// Totals for a completed seat-report run.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeatReportSummary {
    pub teams: usize,
    pub rows: usize,
    pub unmatched_identity: usize,
}

/// Run the team/seat reconciliation report.
///
/// Partial reconciliation (memberships with no directory or seat match) is
/// the normal completion state and is reflected per-row; only transport,
/// access, and envelope failures abort the run.
pub async fn run_seat_report<D, S, T, K>(
    directory: &D,
    seats: &S,
    teams: &T,
    sink: &mut K,
    enterprise: &str,
    login_suffix: Option<&str>,
    now: DateTime<Utc>,
) -> Result<SeatReportSummary>
where
    D: DirectorySource,
    S: SeatSource,
    T: TeamSource,
    K: ReportSink,
{
    let suffix = derive_suffix_token(enterprise, login_suffix);
    info!(enterprise, suffix = %suffix, "starting seat report");

    let users = directory.fetch_users().await?;
    let index = IdentityIndex::build(&users, &suffix);
    info!(users = users.len(), index_keys = index.len(), "directory fetched");

    let seat_map = seats_by_login(seats.fetch_seats().await?);
    info!(seats = seat_map.len(), "seats indexed by login");

    let team_list = teams.fetch_teams().await?;
    info!(teams = team_list.len(), "teams fetched");

    let mut summary = SeatReportSummary { teams: team_list.len(), ..Default::default() };

    for (pos, team) in team_list.iter().enumerate() {
        let Some(slug) = team.report_slug() else {
            warn!(team = %team.report_name(), "team has no slug, skipping");
            continue;
        };

        info!(team = %team.report_name(), slug = %slug, pos = pos + 1, total = team_list.len(), "fetching memberships");
        let memberships = teams.fetch_memberships(&slug).await?;

        let (rows, stats) = reconcile_team(enterprise, team, &memberships, &index, &seat_map, now);
        for row in &rows {
            sink.write_team_seat(row)?;
        }
        summary.rows += stats.rows;
        summary.unmatched_identity += stats.unmatched_identity;
    }

    sink.finish()?;
    info!(
        rows = summary.rows,
        unmatched = summary.unmatched_identity,
        "seat report complete"
    );
    Ok(summary)
}

/// Totals for a completed metrics-report run.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetricsReportSummary {
    pub teams: usize,
    pub teams_without_metrics: usize,
    pub rows: usize,
}

/// Run the usage-metrics flattening report.
///
/// A team whose metrics endpoint reports 404 is logged and skipped; any
/// other failure aborts the run.
pub async fn run_metrics_report<T, M, K>(
    teams: &T,
    metrics: &M,
    sink: &mut K,
    enterprise: &str,
) -> Result<MetricsReportSummary>
where
    T: TeamSource,
    M: MetricsSource,
    K: ReportSink,
{
    info!(enterprise, "starting metrics report");

    let team_list = teams.fetch_teams().await?;
    info!(teams = team_list.len(), "teams fetched");

    let mut summary = MetricsReportSummary { teams: team_list.len(), ..Default::default() };

    for team in &team_list {
        let Some(slug) = team.report_slug() else {
            warn!(team = %team.report_name(), "team has no slug, skipping");
            continue;
        };
        let team_name = team.report_name();

        info!(team = %team_name, slug = %slug, "fetching metrics");
        let Some(entries) = metrics.fetch_team_metrics(&slug).await? else {
            warn!(team = %team_name, slug = %slug, "metrics endpoint not found, skipping team");
            summary.teams_without_metrics += 1;
            continue;
        };

        for entry in &entries {
            for row in flatten_entry(enterprise, &team_name, entry) {
                sink.write_metrics(&row)?;
                summary.rows += 1;
            }
        }
    }

    sink.finish()?;
    info!(rows = summary.rows, skipped = summary.teams_without_metrics, "metrics report complete");
    Ok(summary)
}
