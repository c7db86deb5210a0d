//! Identity index
//!
//! Maps heuristic candidate keys (emails, local-parts, generated logins,
//! directory usernames) to one normalized [`DirectoryRecord`] so membership
//! logins with no shared key can still be reconciled against the directory.

use std::collections::{BTreeSet, HashMap};

use ghreport_domain::types::directory::{DirectoryRecord, ScimUser};
use tracing::debug;

use super::candidates::generate_login_candidates;

/// Read-only candidate-key -> directory-record lookup, built once per run.
///
/// Insertion policy is first-write-wins: when two directory records derive
/// the same key, the record seen first in input order keeps it. Ambiguous
/// keys therefore resolve to the earliest-seen entry.
#[derive(Debug, Default)]
pub struct IdentityIndex {
    entries: HashMap<String, DirectoryRecord>,
}

impl IdentityIndex {
    /// Build the index from a directory snapshot.
    pub fn build(users: &[ScimUser], suffix: &str) -> Self {
        let mut index = Self::default();
        for user in users {
            let record = DirectoryRecord::from_scim(user);
            for key in index_keys(&record, suffix) {
                index.insert_first_wins(key, &record);
            }
        }
        debug!(keys = index.len(), users = users.len(), "identity index built");
        index
    }

    fn insert_first_wins(&mut self, key: String, record: &DirectoryRecord) {
        if key.is_empty() {
            return;
        }
        self.entries.entry(key).or_insert_with(|| record.clone());
    }

    /// Case-insensitive lookup by platform login.
    pub fn lookup(&self, login: &str) -> Option<&DirectoryRecord> {
        self.entries.get(&login.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every key under which a record should be findable.
fn index_keys(record: &DirectoryRecord, suffix: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();

    let email = record.email.trim().to_lowercase();
    if !email.is_empty() {
        keys.insert(email.clone());
        if let Some((local, _)) = email.split_once('@') {
            if !local.is_empty() {
                keys.insert(local.to_string());
            }
        }
        keys.extend(generate_login_candidates(&email, suffix));
    }

    let user_name = record.user_name.trim().to_lowercase();
    if !user_name.is_empty() {
        keys.insert(user_name.clone());
        if user_name.contains('@') {
            if let Some((local, _)) = user_name.split_once('@') {
                if !local.is_empty() {
                    keys.insert(local.to_string());
                }
            }
            keys.extend(generate_login_candidates(&user_name, suffix));
        }
    }

    keys
}
