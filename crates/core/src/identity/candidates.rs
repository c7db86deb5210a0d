//! Login candidate generation
//!
//! Managed-user logins are usually derived from the directory email's
//! local-part plus an enterprise-wide suffix (`s.chander@co.com` under the
//! `Newgen-EMU` enterprise becomes `schander_newgen` or `s-chander_newgen`).
//! These functions enumerate the plausible derivations; both are pure.

use std::collections::BTreeSet;

/// Suffix token appended to candidate logins.
///
/// An explicit override wins (lowercased); otherwise the text before the
/// first `-` of the enterprise slug, lowercased. `Newgen-EMU` -> `newgen`.
pub fn derive_suffix_token(enterprise_slug: &str, login_suffix: Option<&str>) -> String {
    if let Some(suffix) = login_suffix {
        let suffix = suffix.trim().to_lowercase();
        if !suffix.is_empty() {
            return suffix;
        }
    }
    enterprise_slug.split('-').next().unwrap_or("").trim().to_lowercase()
}

/// All plausible platform logins derivable from one email/username.
///
/// Variants of the local-part (text before `@`): as-is, dots removed,
/// `.` -> `-`, `_` -> `-`, restricted to `[a-z0-9-]`, restricted to
/// `[a-z0-9]`. Each variant is stripped of leading/trailing hyphens and, if
/// non-empty, added both bare and as `variant_suffix` when a suffix token is
/// configured. Inputs without `@` yield an empty set.
pub fn generate_login_candidates(email: &str, suffix: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();

    let email = email.trim().to_lowercase();
    let Some((local, _)) = email.split_once('@') else {
        return out;
    };
    let local = local.trim();
    if local.is_empty() {
        return out;
    }

    let variants = [
        local.to_string(),
        local.replace('.', ""),
        local.replace('.', "-"),
        local.replace('_', "-"),
        local.chars().filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-').collect(),
        local.chars().filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit()).collect(),
    ];

    for variant in variants {
        let variant = variant.trim_matches('-').trim();
        if variant.is_empty() {
            continue;
        }
        out.insert(variant.to_string());
        if !suffix.is_empty() {
            out.insert(format!("{variant}_{suffix}"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_from_slug_takes_text_before_first_dash() {
        assert_eq!(derive_suffix_token("Newgen-EMU", None), "newgen");
        assert_eq!(derive_suffix_token("acme", None), "acme");
        assert_eq!(derive_suffix_token("", None), "");
    }

    #[test]
    fn suffix_override_wins_and_is_lowercased() {
        assert_eq!(derive_suffix_token("Newgen-EMU", Some("Custom")), "custom");
        // Blank override falls back to slug derivation
        assert_eq!(derive_suffix_token("Newgen-EMU", Some("  ")), "newgen");
    }

    #[test]
    fn dotted_local_part_produces_joined_and_hyphenated_forms() {
        let set = generate_login_candidates("s.chander@co.com", "newgen");
        assert!(set.contains("schander"));
        assert!(set.contains("schander_newgen"));
        assert!(set.contains("s-chander"));
        assert!(set.contains("s-chander_newgen"));
        assert!(set.contains("s.chander"));
        assert!(set.contains("s.chander_newgen"));
    }

    #[test]
    fn hyphenated_local_part_survives_the_filters() {
        let set = generate_login_candidates("g-singh@domain.com", "newgen");
        assert!(set.contains("g-singh"));
        assert!(set.contains("g-singh_newgen"));
    }

    #[test]
    fn underscores_map_to_hyphens() {
        let set = generate_login_candidates("a_b@x.com", "t");
        assert!(set.contains("a-b"));
        assert!(set.contains("a-b_t"));
        // strict alnum variant
        assert!(set.contains("ab"));
    }

    #[test]
    fn no_suffix_means_bare_forms_only() {
        let set = generate_login_candidates("jane@x.com", "");
        assert_eq!(set, BTreeSet::from(["jane".to_string()]));
    }

    #[test]
    fn non_email_input_yields_empty_set() {
        assert!(generate_login_candidates("not-an-email", "t").is_empty());
        assert!(generate_login_candidates("", "t").is_empty());
        assert!(generate_login_candidates("@x.com", "t").is_empty());
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_login_candidates("s.chander@co.com", "newgen");
        let b = generate_login_candidates("s.chander@co.com", "newgen");
        assert_eq!(a, b);
    }
}
