//! Runtime configuration
//!
//! Populated by the infra config loader from the environment; see
//! `ghreport-infra::config` for the loading rules.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_API_BASE;

/// Configuration for one reporting run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// API root, e.g. `https://api.github.com`.
    pub api_base: String,
    /// Bearer token for all three endpoint families.
    pub token: String,
    /// Enterprise (tenant) slug all endpoints are scoped to.
    pub enterprise: String,
    /// Override for the login suffix token; derived from the slug when unset.
    pub login_suffix: Option<String>,
    /// Output file override; a dated default is used when unset.
    pub output_csv: Option<PathBuf>,
}

impl ReportConfig {
    pub fn new(token: impl Into<String>, enterprise: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: token.into(),
            enterprise: enterprise.into(),
            login_suffix: None,
            output_csv: None,
        }
    }
}
