//! Infrastructure layer: HTTP retrieval, configuration, and CSV export
//!
//! Implements the `ghreport-core` ports against the upstream API families
//! (SCIM directory, Copilot billing seats, enterprise teams, per-team usage
//! metrics) and provides the environment-driven configuration loader and the
//! CSV report sink.

pub mod config;
pub mod export;
pub mod github;
pub mod http;

pub use config::load_from_env;
pub use export::{CsvSink, ReportKind};
pub use github::{DirectoryClient, MetricsClient, SeatsClient, TeamsClient};
pub use http::{HttpClient, RetryPolicy};
