//! Team Copilot metrics endpoint

use std::sync::Arc;

use async_trait::async_trait;
use ghreport_core::ports::MetricsSource;
use ghreport_domain::constants::ACCEPT_GITHUB_JSON;
use ghreport_domain::{ReportError, Result, UsageEntry};
use tracing::{debug, warn};

use crate::http::{Collector, HttpClient, PageCursor};

/// Per-team Copilot usage metrics.
///
/// The endpoint returns a bare array of daily entries and paginates through
/// the `Link` header. A team without metrics (small, or recently created)
/// answers 404; that is a skip, not a failure. The client passed in should
/// carry the rate-aware policy, since long enterprise runs walk hundreds of
/// teams against a shared quota.
pub struct MetricsClient {
    http: Arc<HttpClient>,
    base_url: String,
}

impl MetricsClient {
    pub fn new(http: Arc<HttpClient>, api_base: &str, enterprise: &str) -> Self {
        let base_url =
            format!("{}/enterprises/{enterprise}/team", api_base.trim_end_matches('/'));
        Self { http, base_url }
    }
}

#[async_trait]
impl MetricsSource for MetricsClient {
    async fn fetch_team_metrics(&self, team_slug: &str) -> Result<Option<Vec<UsageEntry>>> {
        let url = format!("{}/{team_slug}/copilot/metrics", self.base_url);
        let collector = Collector::new(&self.http, ACCEPT_GITHUB_JSON, &[]);
        let raw = match collector.collect_all(&url, PageCursor::link_header()).await {
            Ok(items) => items,
            Err(err) if err.is_not_found() => {
                warn!(team = team_slug, "no metrics available, skipping team");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let entries = raw
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<UsageEntry>, _>>()
            .map_err(|e| ReportError::Envelope(format!("malformed metrics entry: {e}")))?;
        debug!(team = team_slug, days = entries.len(), "fetched team metrics");
        Ok(Some(entries))
    }
}
