//! Domain data types, one module per endpoint family plus the report rows.

pub mod directory;
pub mod metrics;
pub mod report;
pub mod seat;
pub mod team;

pub use directory::{DirectoryRecord, ScimEmail, ScimName, ScimUser};
pub use metrics::{
    EditorBreakdown, EditorUsage, EngagementTotals, LanguageUsage, ModelUsage, UsageEntry,
};
pub use report::{MetricsRow, TeamSeatRow, METRICS_HEADER, TEAM_SEAT_HEADER};
pub use seat::{SeatAssignee, SeatRecord};
pub use team::Team;
