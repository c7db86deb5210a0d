//! # ghreport Domain
//!
//! Data types and models for the enterprise Copilot reporting toolkit.
//!
//! This crate contains:
//! - Raw and normalized types for the three endpoint families
//! - The two flat report-row schemas
//! - The error type and `Result` alias
//! - Runtime configuration structures and shared constants
//!
//! ## Architecture
//! - No dependencies on other ghreport crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::ReportConfig;
pub use errors::{ReportError, Result};
pub use types::{
    DirectoryRecord, MetricsRow, ScimUser, SeatRecord, Team, TeamSeatRow, UsageEntry,
    METRICS_HEADER, TEAM_SEAT_HEADER,
};
