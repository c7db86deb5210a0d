//! Join and flatten engines plus the pipelines that drive them.

pub mod activity;
pub mod metrics;
pub mod pipeline;
pub mod seat_index;
pub mod team_seat;

pub use activity::classify;
pub use metrics::flatten_entry;
pub use pipeline::{
    run_metrics_report, run_seat_report, MetricsReportSummary, SeatReportSummary,
};
pub use seat_index::seats_by_login;
pub use team_seat::{membership_login, reconcile_team, JoinStats};
