//! Error types used throughout the reporting toolkit

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for ghreport
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Http(String),

    /// 403/404 while paging a resource. Carries the endpoint and body so the
    /// failing resource is identifiable, and the status so callers can tell
    /// "absent" from "denied".
    #[error("Access error ({status}) for {endpoint}: {body}")]
    Access { endpoint: String, status: u16, body: String },

    #[error("Unsupported payload shape: {0}")]
    Envelope(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for ghreport operations
pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// True for an `Access` error whose status is 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Access { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_error_names_the_endpoint() {
        let err = ReportError::Access {
            endpoint: "https://api.github.com/enterprises/acme/copilot/billing/seats".into(),
            status: 404,
            body: "Not Found".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("copilot/billing/seats"));
        assert!(msg.contains("404"));
        assert!(err.is_not_found());
    }

    #[test]
    fn forbidden_is_not_not_found() {
        let err = ReportError::Access {
            endpoint: "https://api.github.com/x".into(),
            status: 403,
            body: "Forbidden".into(),
        };
        assert!(!err.is_not_found());
    }
}
