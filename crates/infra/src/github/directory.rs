//! Enterprise SCIM directory endpoint

use std::sync::Arc;

use async_trait::async_trait;
use ghreport_core::ports::DirectorySource;
use ghreport_domain::constants::ACCEPT_SCIM_JSON;
use ghreport_domain::{ReportError, Result, ScimUser};
use tracing::info;

use crate::http::{Collector, HttpClient, PageCursor};

/// SCIM provisioned-identity listing for an EMU enterprise.
///
/// Pages with `startIndex`/`count` and trusts the server-reported
/// `totalResults`/`itemsPerPage` for continuation.
pub struct DirectoryClient {
    http: Arc<HttpClient>,
    url: String,
}

impl DirectoryClient {
    pub fn new(http: Arc<HttpClient>, api_base: &str, enterprise: &str) -> Self {
        let url = format!("{}/scim/v2/enterprises/{enterprise}/Users", api_base.trim_end_matches('/'));
        Self { http, url }
    }
}

#[async_trait]
impl DirectorySource for DirectoryClient {
    async fn fetch_users(&self) -> Result<Vec<ScimUser>> {
        let collector = Collector::new(&self.http, ACCEPT_SCIM_JSON, &["Resources"]);
        let raw = collector.collect_all(&self.url, PageCursor::index_count()).await?;
        let users = raw
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<ScimUser>, _>>()
            .map_err(|e| ReportError::Envelope(format!("malformed SCIM user resource: {e}")))?;
        info!(count = users.len(), "fetched SCIM directory");
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn http() -> Arc<HttpClient> {
        Arc::new(HttpClient::builder().bearer_token("t").build().unwrap())
    }

    #[tokio::test]
    async fn fetches_and_deserializes_all_pages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scim/v2/enterprises/acme/Users"))
            .and(header("Accept", "application/scim+json"))
            .and(query_param("startIndex", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "totalResults": 2,
                "itemsPerPage": 1,
                "Resources": [{
                    "userName": "jdoe_acme",
                    "displayName": "Jane Doe",
                    "emails": [{"value": "j.doe@acme.com", "primary": true}],
                    "active": true
                }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/scim/v2/enterprises/acme/Users"))
            .and(query_param("startIndex", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "totalResults": 2,
                "itemsPerPage": 1,
                "Resources": [{
                    "userName": "bsmith_acme",
                    "emails": [],
                    "active": false
                }]
            })))
            .mount(&server)
            .await;

        let client = DirectoryClient::new(http(), &server.uri(), "acme");
        let users = client.fetch_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].user_name.as_deref(), Some("jdoe_acme"));
        assert_eq!(users[1].active, Some(false));
    }

    #[tokio::test]
    async fn malformed_resource_is_an_envelope_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scim/v2/enterprises/acme/Users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "totalResults": 1,
                "itemsPerPage": 1,
                "Resources": [{"userName": 42}]
            })))
            .mount(&server)
            .await;

        let client = DirectoryClient::new(http(), &server.uri(), "acme");
        let err = client.fetch_users().await.unwrap_err();
        assert!(matches!(err, ReportError::Envelope(_)));
    }
}
