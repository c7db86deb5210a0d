//! Copilot billing seat types

use serde::{Deserialize, Serialize};

/// One seat from the billing listing. One seat exists per assignee login
/// upstream; the seat index relies on that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatRecord {
    #[serde(default)]
    pub assignee: Option<SeatAssignee>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub plan_type: Option<String>,
    #[serde(default)]
    pub last_activity_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatAssignee {
    #[serde(default)]
    pub login: Option<String>,
}

impl SeatRecord {
    /// Trimmed assignee login, or `None` when absent/blank.
    pub fn login(&self) -> Option<&str> {
        self.assignee
            .as_ref()
            .and_then(|a| a.login.as_deref())
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_is_trimmed_and_blank_is_none() {
        let seat: SeatRecord = serde_json::from_value(serde_json::json!({
            "assignee": { "login": "  octocat  " },
            "status": "active"
        }))
        .unwrap();
        assert_eq!(seat.login(), Some("octocat"));

        let blank: SeatRecord =
            serde_json::from_value(serde_json::json!({ "assignee": { "login": "" } })).unwrap();
        assert_eq!(blank.login(), None);

        let missing: SeatRecord = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(missing.login(), None);
    }
}
