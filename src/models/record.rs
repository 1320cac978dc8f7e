//! Password Record Module
//!
//! Defines the stored password entity and the tags attached to it.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Tag ==
/// A label attached to zero or more password records.
///
/// Tags are identified by `id` alone; two tags with the same id are the
/// same tag regardless of name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

impl Tag {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

// == Password Record ==
/// A stored password with ownership and tag metadata.
///
/// `password` holds the hashed secret once the record has passed through
/// the service; the plaintext is never kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordRecord {
    /// Assigned by the repository on first save
    pub id: Option<u64>,
    pub password: String,
    /// Set at construction; the repository keeps the original on update
    pub created_at: DateTime<Utc>,
    pub owner: String,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl PasswordRecord {
    // == Constructor ==
    /// Creates an unsaved record stamped with the current time.
    pub fn new(password: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: None,
            password: password.into(),
            created_at: Utc::now(),
            owner: owner.into(),
            tags: BTreeSet::new(),
        }
    }

    /// Adds tags, ignoring ones whose id is already present.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// True if any attached tag carries exactly `name`.
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name == name)
    }
}
