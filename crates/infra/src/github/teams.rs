//! Enterprise teams and team membership endpoints

use std::sync::Arc;

use async_trait::async_trait;
use ghreport_core::ports::TeamSource;
use ghreport_domain::constants::ACCEPT_GITHUB_JSON;
use ghreport_domain::{ReportError, Result, Team};
use serde_json::Value;
use tracing::info;

use crate::http::{Collector, HttpClient, PageCursor};

/// Enterprise team roster and per-team membership listings.
///
/// Membership listings use `page`/`per_page` pagination. The roster listing
/// defaults to the same, but the metrics run follows the `Link` header with
/// the courtesy delay instead, since a short roster page there can still
/// carry a `next` relation. Envelope keys vary across deployments, so
/// several are probed in order before failing.
pub struct TeamsClient {
    http: Arc<HttpClient>,
    base_url: String,
    roster_cursor: PageCursor,
}

impl TeamsClient {
    pub fn new(http: Arc<HttpClient>, api_base: &str, enterprise: &str) -> Self {
        let base_url =
            format!("{}/enterprises/{enterprise}/teams", api_base.trim_end_matches('/'));
        Self { http, base_url, roster_cursor: PageCursor::page_number() }
    }

    /// Page the roster by the `Link` header's `next` relation.
    pub fn with_link_pagination(mut self) -> Self {
        self.roster_cursor = PageCursor::link_header();
        self
    }
}

#[async_trait]
impl TeamSource for TeamsClient {
    async fn fetch_teams(&self) -> Result<Vec<Team>> {
        let collector = Collector::new(&self.http, ACCEPT_GITHUB_JSON, &["teams", "items", "data"]);
        let raw = collector.collect_all(&self.base_url, self.roster_cursor.clone()).await?;
        let teams = raw
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<Team>, _>>()
            .map_err(|e| ReportError::Envelope(format!("malformed team entry: {e}")))?;
        info!(count = teams.len(), "fetched enterprise teams");
        Ok(teams)
    }

    async fn fetch_memberships(&self, team_slug: &str) -> Result<Vec<Value>> {
        let url = format!("{}/{team_slug}/memberships", self.base_url);
        let collector =
            Collector::new(&self.http, ACCEPT_GITHUB_JSON, &["memberships", "items", "data"]);
        collector.collect_all(&url, PageCursor::page_number()).await
    }
}
