//! Flat report rows
//!
//! The two output schemas are fixed: 14 columns for the team/seat report,
//! 19 for the usage-metrics report. Rows are created at join time and never
//! mutated; `record()` yields the column values in header order for the sink.

use serde::{Deserialize, Serialize};

/// Column header for the team/seat report, in output order.
pub const TEAM_SEAT_HEADER: [&str; 14] = [
    "enterprise",
    "team_name",
    "team_slug",
    "login",
    "name",
    "email",
    "scim_userName",
    "copilot_assigned",
    "copilot_status",
    "plan_type",
    "last_activity_at",
    "active_status",
    "seat_created_at",
    "seat_updated_at",
];

/// Column header for the usage-metrics report, in output order.
pub const METRICS_HEADER: [&str; 19] = [
    "Enterprise",
    "Team",
    "date",
    "editor",
    "model",
    "language",
    "total_engaged_users",
    "total_code_acceptances",
    "total_code_suggestions",
    "total_code_lines_accepted",
    "total_code_lines_suggested",
    "total_active_users",
    "total_chat_dotcom_engaged_users",
    "total_pull_request_dotcom_engaged_users",
    "chat_editor_name",
    "total_chats",
    "is_custom_model",
    "total_chat_copy_events",
    "total_chat_insertion_events",
];

/// One joined (team, membership) row. Unmatched identity fields are blank;
/// unmatched seat fields are blank with `copilot_assigned = "no"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSeatRow {
    pub enterprise: String,
    pub team_name: String,
    pub team_slug: String,
    pub login: String,
    pub name: String,
    pub email: String,
    pub scim_user_name: String,
    pub copilot_assigned: String,
    pub copilot_status: String,
    pub plan_type: String,
    pub last_activity_at: String,
    pub active_status: String,
    pub seat_created_at: String,
    pub seat_updated_at: String,
}

impl TeamSeatRow {
    /// Column values in [`TEAM_SEAT_HEADER`] order.
    pub fn record(&self) -> [String; 14] {
        [
            self.enterprise.clone(),
            self.team_name.clone(),
            self.team_slug.clone(),
            self.login.clone(),
            self.name.clone(),
            self.email.clone(),
            self.scim_user_name.clone(),
            self.copilot_assigned.clone(),
            self.copilot_status.clone(),
            self.plan_type.clone(),
            self.last_activity_at.clone(),
            self.active_status.clone(),
            self.seat_created_at.clone(),
            self.seat_updated_at.clone(),
        ]
    }
}

/// One flattened usage-metrics row. The completion and chat row families
/// share this schema; each leaves the other family's columns zero/blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsRow {
    pub enterprise: String,
    pub team: String,
    pub date: String,
    pub editor: String,
    pub model: String,
    pub language: String,
    pub total_engaged_users: u64,
    pub total_code_acceptances: u64,
    pub total_code_suggestions: u64,
    pub total_code_lines_accepted: u64,
    pub total_code_lines_suggested: u64,
    pub total_active_users: u64,
    pub total_chat_engaged_users: u64,
    pub total_pr_engaged_users: u64,
    pub chat_editor: String,
    pub total_chats: u64,
    pub is_custom_model: bool,
    pub total_chat_copy_events: u64,
    pub total_chat_insertion_events: u64,
}

impl MetricsRow {
    /// Column values in [`METRICS_HEADER`] order.
    pub fn record(&self) -> [String; 19] {
        [
            self.enterprise.clone(),
            self.team.clone(),
            self.date.clone(),
            self.editor.clone(),
            self.model.clone(),
            self.language.clone(),
            self.total_engaged_users.to_string(),
            self.total_code_acceptances.to_string(),
            self.total_code_suggestions.to_string(),
            self.total_code_lines_accepted.to_string(),
            self.total_code_lines_suggested.to_string(),
            self.total_active_users.to_string(),
            self.total_chat_engaged_users.to_string(),
            self.total_pr_engaged_users.to_string(),
            self.chat_editor.clone(),
            self.total_chats.to_string(),
            self.is_custom_model.to_string(),
            self.total_chat_copy_events.to_string(),
            self.total_chat_insertion_events.to_string(),
        ]
    }
}
