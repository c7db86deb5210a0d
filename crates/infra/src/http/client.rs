//! HTTP client with built-in retry and rate-limit handling
//!
//! Two policies cover the upstream endpoint families:
//! - [`RetryPolicy::Backoff`]: retry transient statuses after the fact with
//!   a server-directed or capped linear wait, then hand back the last
//!   response as-is so callers can inspect the status themselves.
//! - [`RetryPolicy::RateAware`]: issue each request once, but consult the
//!   rate-limit quota headers from the previous response first and sleep
//!   through an exhausted window before sending.

use std::time::Duration;

use ghreport_domain::constants::{BACKOFF_CAP_SECS, HTTP_TIMEOUT_SECS, MAX_HTTP_ATTEMPTS};
use ghreport_domain::{ReportError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client as ReqwestClient, Response};
use tracing::{debug, warn};

use super::rate_limit::RateLimitGate;

/// Status codes treated as transient under the backoff policy.
const RETRY_STATUSES: [u16; 6] = [403, 429, 500, 502, 503, 504];

/// How transient failures are absorbed before a response reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Retry transient statuses up to the attempt bound, then return the
    /// last response.
    Backoff,
    /// No status retries; gate each request on the remaining-quota headers
    /// observed so far.
    RateAware,
}

/// HTTP client wrapping one shared reqwest connection pool.
#[derive(Debug)]
pub struct HttpClient {
    client: ReqwestClient,
    policy: RetryPolicy,
    max_attempts: u32,
    gate: RateLimitGate,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Issue a GET with the configured retry policy.
    ///
    /// Under [`RetryPolicy::Backoff`], a response is always returned once
    /// the server answers at all, even after retries are exhausted; only
    /// transport failures map to `Network`. Callers must inspect the status.
    pub async fn get(
        &self,
        url: &str,
        accept: &str,
        query: &[(&str, String)],
    ) -> Result<Response> {
        match self.policy {
            RetryPolicy::Backoff => self.get_with_backoff(url, accept, query).await,
            RetryPolicy::RateAware => self.get_rate_aware(url, accept, query).await,
        }
    }

    async fn get_with_backoff(
        &self,
        url: &str,
        accept: &str,
        query: &[(&str, String)],
    ) -> Result<Response> {
        let attempts = self.max_attempts.max(1);

        for attempt in 1..=attempts {
            debug!(attempt, url, "sending HTTP request");

            let response = match self.send_once(url, accept, query).await {
                Ok(response) => response,
                Err(err) => {
                    if attempt < attempts {
                        warn!(attempt, url, error = %err, "transport failure, retrying");
                        tokio::time::sleep(linear_backoff(attempt)).await;
                        continue;
                    }
                    return Err(err);
                }
            };

            let status = response.status().as_u16();
            debug!(attempt, url, status, "received HTTP response");

            if RETRY_STATUSES.contains(&status) && attempt < attempts {
                let wait = retry_after(&response).unwrap_or_else(|| linear_backoff(attempt));
                warn!(attempt, url, status, wait_secs = wait.as_secs(), "transient status, backing off");
                tokio::time::sleep(wait).await;
                continue;
            }

            return Ok(response);
        }

        Err(ReportError::Internal(
            "http client exhausted retries without producing a result".into(),
        ))
    }

    async fn get_rate_aware(
        &self,
        url: &str,
        accept: &str,
        query: &[(&str, String)],
    ) -> Result<Response> {
        self.gate.wait_if_exhausted().await;

        debug!(url, "sending HTTP request");
        let response = self.send_once(url, accept, query).await?;
        debug!(url, status = response.status().as_u16(), "received HTTP response");

        self.gate.observe(response.headers());
        Ok(response)
    }

    async fn send_once(
        &self,
        url: &str,
        accept: &str,
        query: &[(&str, String)],
    ) -> Result<Response> {
        self.client
            .get(url)
            .header(ACCEPT, accept)
            .query(query)
            .send()
            .await
            .map_err(|err| ReportError::Network(format!("GET {url} failed: {err}")))
    }
}

/// Server-supplied retry delay, honored only when present and numeric.
fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get("Retry-After")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Capped linear backoff: `min(30, 2 × attempt)` seconds.
fn linear_backoff(attempt: u32) -> Duration {
    Duration::from_secs(BACKOFF_CAP_SECS.min(2 * u64::from(attempt)))
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    policy: RetryPolicy,
    max_attempts: u32,
    token: Option<String>,
    user_agent: String,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            policy: RetryPolicy::Backoff,
            max_attempts: MAX_HTTP_ATTEMPTS,
            token: None,
            user_agent: concat!("ghreport/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Total number of attempts (initial try + retries) under backoff.
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Bearer token attached to every request.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ghreport_domain::constants::API_VERSION_HEADER,
            HeaderValue::from_static(ghreport_domain::constants::API_VERSION),
        );
        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ReportError::Config("bearer token contains invalid characters".into()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|err| ReportError::Network(format!("failed to build HTTP client: {err}")))?;

        Ok(HttpClient {
            client,
            policy: self.policy,
            max_attempts: self.max_attempts,
            gate: RateLimitGate::default(),
        })
    }
}
