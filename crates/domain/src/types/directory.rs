//! Directory (SCIM) types
//!
//! Raw SCIM user entries as returned by the identity service, and the
//! normalized record the identity index is built from. The raw structs keep
//! every field optional: SCIM payloads in the wild omit freely.

use serde::{Deserialize, Serialize};

/// Raw SCIM user entry from the directory listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScimUser {
    #[serde(rename = "userName", default)]
    pub user_name: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub name: Option<ScimName>,
    #[serde(default)]
    pub emails: Vec<ScimEmail>,
    #[serde(default)]
    pub active: Option<bool>,
}

/// Structured name object on a SCIM user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScimName {
    #[serde(default)]
    pub formatted: Option<String>,
    #[serde(rename = "givenName", default)]
    pub given_name: Option<String>,
    #[serde(rename = "familyName", default)]
    pub family_name: Option<String>,
}

/// One email entry on a SCIM user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScimEmail {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub primary: Option<bool>,
}

/// Normalized directory record. Immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRecord {
    /// Best available human name for the person.
    pub name: String,
    /// Primary email, chosen by precedence (see [`DirectoryRecord::from_scim`]).
    pub email: String,
    /// The directory's own userName field, verbatim.
    pub user_name: String,
}

impl DirectoryRecord {
    /// Build a record from a raw SCIM entry.
    ///
    /// Email precedence: the entry flagged `primary` wins, then the first
    /// entry with a value, then the userName itself when it contains `@`.
    /// Name precedence: `displayName`, then `name.formatted`, then
    /// given + family joined with a space.
    pub fn from_scim(user: &ScimUser) -> Self {
        Self {
            name: pick_name(user),
            email: pick_email(user),
            user_name: user.user_name.as_deref().unwrap_or("").trim().to_string(),
        }
    }
}

fn pick_email(user: &ScimUser) -> String {
    if let Some(primary) = user
        .emails
        .iter()
        .find(|e| e.primary == Some(true) && e.value.as_deref().is_some_and(|v| !v.is_empty()))
    {
        return primary.value.as_deref().unwrap_or("").trim().to_string();
    }

    if let Some(first) =
        user.emails.iter().find(|e| e.value.as_deref().is_some_and(|v| !v.is_empty()))
    {
        return first.value.as_deref().unwrap_or("").trim().to_string();
    }

    let user_name = user.user_name.as_deref().unwrap_or("").trim();
    if user_name.contains('@') {
        user_name.to_string()
    } else {
        String::new()
    }
}

fn pick_name(user: &ScimUser) -> String {
    if let Some(dn) = user.display_name.as_deref() {
        let dn = dn.trim();
        if !dn.is_empty() {
            return dn.to_string();
        }
    }

    if let Some(name) = &user.name {
        if let Some(formatted) = name.formatted.as_deref() {
            let formatted = formatted.trim();
            if !formatted.is_empty() {
                return formatted.to_string();
            }
        }
        let given = name.given_name.as_deref().unwrap_or("").trim();
        let family = name.family_name.as_deref().unwrap_or("").trim();
        let full =
            [given, family].iter().filter(|p| !p.is_empty()).copied().collect::<Vec<_>>().join(" ");
        if !full.is_empty() {
            return full;
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(value: &str, primary: Option<bool>) -> ScimEmail {
        ScimEmail { value: Some(value.to_string()), primary }
    }

    #[test]
    fn primary_email_wins_over_order() {
        let user = ScimUser {
            emails: vec![email("first@co.com", None), email("primary@co.com", Some(true))],
            ..Default::default()
        };
        assert_eq!(DirectoryRecord::from_scim(&user).email, "primary@co.com");
    }

    #[test]
    fn first_email_used_when_no_primary_flag() {
        let user = ScimUser {
            emails: vec![email("first@co.com", None), email("second@co.com", Some(false))],
            ..Default::default()
        };
        assert_eq!(DirectoryRecord::from_scim(&user).email, "first@co.com");
    }

    #[test]
    fn username_fallback_requires_at_sign() {
        let with_at = ScimUser {
            user_name: Some("person@co.com".to_string()),
            ..Default::default()
        };
        assert_eq!(DirectoryRecord::from_scim(&with_at).email, "person@co.com");

        let without_at = ScimUser {
            user_name: Some("person".to_string()),
            ..Default::default()
        };
        assert_eq!(DirectoryRecord::from_scim(&without_at).email, "");
    }

    #[test]
    fn name_precedence_display_then_formatted_then_parts() {
        let user = ScimUser {
            display_name: Some("Display Name".to_string()),
            name: Some(ScimName {
                formatted: Some("Formatted Name".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(DirectoryRecord::from_scim(&user).name, "Display Name");

        let user = ScimUser {
            name: Some(ScimName {
                formatted: Some("Formatted Name".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(DirectoryRecord::from_scim(&user).name, "Formatted Name");

        let user = ScimUser {
            name: Some(ScimName {
                given_name: Some("Given".to_string()),
                family_name: Some("Family".to_string()),
                formatted: None,
            }),
            ..Default::default()
        };
        assert_eq!(DirectoryRecord::from_scim(&user).name, "Given Family");
    }

    #[test]
    fn blank_entry_degrades_to_empty_fields() {
        let record = DirectoryRecord::from_scim(&ScimUser::default());
        assert_eq!(record, DirectoryRecord::default());
    }
}
