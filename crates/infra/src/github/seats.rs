//! Copilot billing seats endpoint

use std::sync::Arc;

use async_trait::async_trait;
use ghreport_core::ports::SeatSource;
use ghreport_domain::constants::ACCEPT_GITHUB_JSON;
use ghreport_domain::{ReportError, Result, SeatRecord};
use tracing::info;

use crate::http::{Collector, HttpClient, PageCursor};

/// Enterprise Copilot seat assignments.
///
/// Standard `page`/`per_page` pagination; a short page ends the listing.
pub struct SeatsClient {
    http: Arc<HttpClient>,
    url: String,
}

impl SeatsClient {
    pub fn new(http: Arc<HttpClient>, api_base: &str, enterprise: &str) -> Self {
        let url = format!(
            "{}/enterprises/{enterprise}/copilot/billing/seats",
            api_base.trim_end_matches('/')
        );
        Self { http, url }
    }
}

#[async_trait]
impl SeatSource for SeatsClient {
    async fn fetch_seats(&self) -> Result<Vec<SeatRecord>> {
        let collector = Collector::new(&self.http, ACCEPT_GITHUB_JSON, &["seats"]);
        let raw = collector.collect_all(&self.url, PageCursor::page_number()).await?;
        let seats = raw
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<SeatRecord>, _>>()
            .map_err(|e| ReportError::Envelope(format!("malformed seat entry: {e}")))?;
        info!(count = seats.len(), "fetched billing seats");
        Ok(seats)
    }
}
