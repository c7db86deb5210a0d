//! # ghreport Core
//!
//! Business logic for the enterprise Copilot reporting toolkit:
//! identity reconciliation, seat indexing, activity classification, the
//! join/flatten engines, and the port traits the infra layer implements.
//!
//! Everything here is pure or port-driven; no HTTP, no filesystem.

pub mod identity;
pub mod ports;
pub mod report;

pub use identity::{derive_suffix_token, generate_login_candidates, IdentityIndex};
pub use ports::{DirectorySource, MetricsSource, ReportSink, SeatSource, TeamSource};
pub use report::{run_metrics_report, run_seat_report};
