//! Page collection engine
//!
//! Drives an [`HttpClient`] and a [`PageCursor`] until the cursor stops,
//! accumulating every page's items. Endpoint clients supply the URL, the
//! Accept header, and the envelope keys; everything else (status handling,
//! envelope extraction, continuation, courtesy pacing) lives here.

use ghreport_domain::constants::COURTESY_DELAY_SECS;
use ghreport_domain::{ReportError, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::client::HttpClient;
use super::envelope::items_from_payload;
use super::pagination::{link_has_next, PageContext, PageCursor};

pub struct Collector<'a> {
    client: &'a HttpClient,
    accept: &'static str,
    envelope_keys: &'static [&'static str],
}

impl<'a> Collector<'a> {
    pub fn new(
        client: &'a HttpClient,
        accept: &'static str,
        envelope_keys: &'static [&'static str],
    ) -> Self {
        Self { client, accept, envelope_keys }
    }

    /// Fetch every page behind `url`, returning the accumulated items.
    ///
    /// The retry budget inside the client has already been spent by the time
    /// a response reaches us, so any non-success status here is terminal:
    /// 403 and 404 map to access errors carrying the endpoint and body, the
    /// rest to plain HTTP errors.
    pub async fn collect_all(&self, url: &str, mut cursor: PageCursor) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        let mut page = 0u32;

        loop {
            page += 1;
            let response = self.client.get(url, self.accept, &cursor.params()).await?;
            let status = response.status();
            let has_next_link = response
                .headers()
                .get(reqwest::header::LINK)
                .and_then(|v| v.to_str().ok())
                .is_some_and(link_has_next);

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(match status.as_u16() {
                    403 | 404 => ReportError::Access {
                        endpoint: url.to_string(),
                        status: status.as_u16(),
                        body,
                    },
                    code => ReportError::Http(format!("GET {url} returned {code}: {body}")),
                });
            }

            let payload: Value = response
                .json()
                .await
                .map_err(|e| ReportError::Http(format!("invalid JSON from {url}: {e}")))?;
            let total_results = payload.get("totalResults").and_then(Value::as_u64);
            let items_per_page = payload.get("itemsPerPage").and_then(Value::as_u64);

            let page_items = items_from_payload(payload, self.envelope_keys, url)?;
            let ctx = PageContext {
                items_returned: page_items.len(),
                total_results,
                items_per_page,
                has_next_link,
            };
            debug!(url, page, items = page_items.len(), "collected page");
            items.extend(page_items);

            match cursor.advance(&ctx) {
                Some(next) => {
                    if next.wants_courtesy_delay() {
                        tokio::time::sleep(Duration::from_secs(COURTESY_DELAY_SECS)).await;
                    }
                    cursor = next;
                }
                None => break,
            }
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghreport_domain::constants::{ACCEPT_GITHUB_JSON, ACCEPT_SCIM_JSON};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> HttpClient {
        HttpClient::builder().bearer_token("test-token").build().unwrap()
    }

    #[tokio::test]
    async fn page_number_collects_until_short_page() {
        let server = MockServer::start().await;
        let full: Vec<Value> = (0..100).map(|i| json!({"n": i})).collect();

        Mock::given(method("GET"))
            .and(path("/seats"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "seats": full })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/seats"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "seats": [{"n": 100}] })),
            )
            .mount(&server)
            .await;

        let client = client();
        let collector = Collector::new(&client, ACCEPT_GITHUB_JSON, &["seats"]);
        let items = collector
            .collect_all(&format!("{}/seats", server.uri()), PageCursor::page_number())
            .await
            .unwrap();
        assert_eq!(items.len(), 101);
    }

    #[tokio::test]
    async fn index_count_zero_items_per_page_terminates_after_one_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "totalResults": 5000,
                "itemsPerPage": 0,
                "Resources": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client();
        let collector = Collector::new(&client, ACCEPT_SCIM_JSON, &["Resources"]);
        let items = collector
            .collect_all(&format!("{}/Users", server.uri()), PageCursor::index_count())
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn index_count_walks_total_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Users"))
            .and(query_param("startIndex", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "totalResults": 3,
                "itemsPerPage": 2,
                "Resources": [{"id": "a"}, {"id": "b"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/Users"))
            .and(query_param("startIndex", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "totalResults": 3,
                "itemsPerPage": 2,
                "Resources": [{"id": "c"}]
            })))
            .mount(&server)
            .await;

        let client = client();
        let collector = Collector::new(&client, ACCEPT_SCIM_JSON, &["Resources"]);
        let items = collector
            .collect_all(&format!("{}/Users", server.uri()), PageCursor::index_count())
            .await
            .unwrap();
        assert_eq!(items.len(), 3);
    }

    #[tokio::test]
    async fn not_found_maps_to_access_error_with_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/seats"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let client = client();
        let collector = Collector::new(&client, ACCEPT_GITHUB_JSON, &["seats"]);
        let url = format!("{}/seats", server.uri());
        let err = collector.collect_all(&url, PageCursor::page_number()).await.unwrap_err();
        match err {
            ReportError::Access { endpoint, status, body } => {
                assert_eq!(endpoint, url);
                assert_eq!(status, 404);
                assert_eq!(body, "Not Found");
            }
            other => panic!("expected access error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_after_retries_maps_to_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/seats"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client =
            HttpClient::builder().bearer_token("test-token").max_attempts(1).build().unwrap();
        let collector = Collector::new(&client, ACCEPT_GITHUB_JSON, &["seats"]);
        let err = collector
            .collect_all(&format!("{}/seats", server.uri()), PageCursor::page_number())
            .await
            .unwrap_err();
        assert!(matches!(err, ReportError::Http(_)));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn link_header_follows_next_relation() {
        let server = MockServer::start().await;
        let next = format!(r#"<{}/metrics?page=2>; rel="next""#, server.uri());

        Mock::given(method("GET"))
            .and(path("/metrics"))
            .and(query_param("page", "1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Link", next.as_str())
                    .set_body_json(json!([{"date": "2025-06-01"}])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/metrics"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"date": "2025-06-02"}])),
            )
            .mount(&server)
            .await;

        let client = client();
        let collector = Collector::new(&client, ACCEPT_GITHUB_JSON, &[]);
        let items = collector
            .collect_all(&format!("{}/metrics", server.uri()), PageCursor::link_header())
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
    }
}
