//! Copilot usage metrics types
//!
//! One `UsageEntry` per reporting date per team, holding two nested trees:
//! IDE code completions (editor > model > language) and IDE chat
//! (editor > model), plus flat date-level aggregates. Counters default to
//! zero so sparse payloads deserialize cleanly.

use serde::{Deserialize, Serialize};

/// One per-date metrics entry for a team.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageEntry {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub total_active_users: u64,
    #[serde(default)]
    pub copilot_ide_code_completions: Option<EditorBreakdown>,
    #[serde(default)]
    pub copilot_ide_chat: Option<EditorBreakdown>,
    #[serde(default)]
    pub copilot_dotcom_chat: Option<EngagementTotals>,
    #[serde(default)]
    pub copilot_dotcom_pull_requests: Option<EngagementTotals>,
}

/// Editor-keyed breakdown shared by completions and chat trees.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorBreakdown {
    #[serde(default)]
    pub editors: Vec<EditorUsage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorUsage {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub models: Vec<ModelUsage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelUsage {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_custom_model: bool,
    /// Per-language completion counters; empty on chat models.
    #[serde(default)]
    pub languages: Vec<LanguageUsage>,
    /// Chat counters; zero on completion models.
    #[serde(default)]
    pub total_chats: u64,
    #[serde(default)]
    pub total_chat_copy_events: u64,
    #[serde(default)]
    pub total_chat_insertion_events: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageUsage {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub total_engaged_users: u64,
    #[serde(default)]
    pub total_code_acceptances: u64,
    #[serde(default)]
    pub total_code_suggestions: u64,
    #[serde(default)]
    pub total_code_lines_accepted: u64,
    #[serde(default)]
    pub total_code_lines_suggested: u64,
}

/// Flat engagement totals for dotcom chat / pull requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngagementTotals {
    #[serde(default)]
    pub total_engaged_users: u64,
}

impl UsageEntry {
    /// Engaged-user count from the dotcom chat subtree, zero when absent.
    pub fn chat_engaged_users(&self) -> u64 {
        self.copilot_dotcom_chat.as_ref().map_or(0, |t| t.total_engaged_users)
    }

    /// Engaged-user count from the pull-request subtree, zero when absent.
    pub fn pr_engaged_users(&self) -> u64 {
        self.copilot_dotcom_pull_requests.as_ref().map_or(0, |t| t.total_engaged_users)
    }
}
