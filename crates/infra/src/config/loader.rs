//! Configuration loader
//!
//! Loads run configuration from environment variables.
//!
//! ## Environment Variables
//! - `GITHUB_TOKEN`: API token with enterprise billing and SCIM scopes (required)
//! - `ENTERPRISE_SLUG`: Enterprise slug the report runs against (required)
//! - `API_BASE`: API base URL, defaults to the public endpoint
//! - `LOGIN_SUFFIX`: Override for the login suffix token derived from the slug
//! - `OUTPUT_CSV`: Output file path; a dated default filename when unset

use std::path::PathBuf;

use ghreport_domain::constants::DEFAULT_API_BASE;
use ghreport_domain::{ReportConfig, ReportError, Result};

/// Load configuration from environment variables.
///
/// # Errors
/// Returns `ReportError::Config` if `GITHUB_TOKEN` or `ENTERPRISE_SLUG` is
/// missing or blank.
pub fn load_from_env() -> Result<ReportConfig> {
    let token = env_var("GITHUB_TOKEN")?;
    let enterprise = env_var("ENTERPRISE_SLUG")?;
    let api_base = env_opt("API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    let login_suffix = env_opt("LOGIN_SUFFIX");
    let output_csv = env_opt("OUTPUT_CSV").map(PathBuf::from);

    tracing::info!(enterprise = %enterprise, api_base = %api_base, "configuration loaded");
    let mut config = ReportConfig::new(token, enterprise);
    config.api_base = api_base;
    config.login_suffix = login_suffix;
    config.output_csv = output_csv;
    Ok(config)
}

/// Get required environment variable, rejecting blank values.
///
/// # Errors
/// Returns `ReportError::Config` if the variable is not set or is empty.
fn env_var(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ReportError::Config(format!("Missing required environment variable: {}", key))),
    }
}

/// Optional environment variable; empty values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use once_cell::sync::Lazy;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_all() {
        for key in ["GITHUB_TOKEN", "ENTERPRISE_SLUG", "API_BASE", "LOGIN_SUFFIX", "OUTPUT_CSV"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_all();

        std::env::set_var("GITHUB_TOKEN", "ghp_test");
        std::env::set_var("ENTERPRISE_SLUG", "Newgen-EMU");
        std::env::set_var("API_BASE", "https://ghe.example.com/api/v3");
        std::env::set_var("LOGIN_SUFFIX", "newgen");
        std::env::set_var("OUTPUT_CSV", "/tmp/report.csv");

        let config = load_from_env().expect("config should load");
        assert_eq!(config.token, "ghp_test");
        assert_eq!(config.enterprise, "Newgen-EMU");
        assert_eq!(config.api_base, "https://ghe.example.com/api/v3");
        assert_eq!(config.login_suffix.as_deref(), Some("newgen"));
        assert_eq!(config.output_csv, Some(PathBuf::from("/tmp/report.csv")));

        clear_all();
    }

    #[test]
    fn test_load_from_env_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_all();

        std::env::set_var("GITHUB_TOKEN", "ghp_test");
        std::env::set_var("ENTERPRISE_SLUG", "acme");

        let config = load_from_env().expect("config should load");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert!(config.login_suffix.is_none());
        assert!(config.output_csv.is_none());

        clear_all();
    }

    #[test]
    fn test_load_from_env_missing_token() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_all();

        std::env::set_var("ENTERPRISE_SLUG", "acme");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
        assert!(err.to_string().contains("GITHUB_TOKEN"));

        clear_all();
    }

    #[test]
    fn test_blank_required_var_rejected() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_all();

        std::env::set_var("GITHUB_TOKEN", "   ");
        std::env::set_var("ENTERPRISE_SLUG", "acme");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));

        clear_all();
    }

    #[test]
    fn test_blank_optional_var_is_unset() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_all();

        std::env::set_var("GITHUB_TOKEN", "ghp_test");
        std::env::set_var("ENTERPRISE_SLUG", "acme");
        std::env::set_var("LOGIN_SUFFIX", "");

        let config = load_from_env().expect("config should load");
        assert!(config.login_suffix.is_none());

        clear_all();
    }
}
