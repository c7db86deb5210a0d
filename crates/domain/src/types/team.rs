//! Enterprise team types
//!
//! The teams endpoint is loose about field names (`name` vs `display_name`,
//! `slug` vs `team_slug`), so the raw struct carries all of them and the
//! accessors apply the precedence the report expects.

use serde::{Deserialize, Serialize};

/// One enterprise team from the listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub team_slug: Option<String>,
}

impl Team {
    /// Display name: `name`, else `display_name`, else the slug.
    pub fn report_name(&self) -> String {
        for candidate in [&self.name, &self.display_name, &self.slug] {
            if let Some(v) = candidate.as_deref() {
                let v = v.trim();
                if !v.is_empty() {
                    return v.to_string();
                }
            }
        }
        String::new()
    }

    /// URL slug: `slug`, else `team_slug`. Teams without one cannot be
    /// queried for memberships or metrics and are skipped by the pipelines.
    pub fn report_slug(&self) -> Option<String> {
        for candidate in [&self.slug, &self.team_slug] {
            if let Some(v) = candidate.as_deref() {
                let v = v.trim();
                if !v.is_empty() {
                    return Some(v.to_string());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_falls_back_to_display_name_then_slug() {
        let team = Team { display_name: Some("Platform".into()), ..Default::default() };
        assert_eq!(team.report_name(), "Platform");

        let team = Team { slug: Some("platform".into()), ..Default::default() };
        assert_eq!(team.report_name(), "platform");
    }

    #[test]
    fn slug_falls_back_to_team_slug() {
        let team = Team { team_slug: Some("platform".into()), ..Default::default() };
        assert_eq!(team.report_slug(), Some("platform".to_string()));

        let team = Team { name: Some("No Slug".into()), ..Default::default() };
        assert_eq!(team.report_slug(), None);
    }
}
