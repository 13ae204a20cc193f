//! Innovation - a catalog record describing a submitted contribution.

use crate::{Identity, NewInnovation};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An immutable catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Innovation {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Free-text field of innovation (e.g., "Computer Science")
    pub field: Option<String>,
    pub owner_id: Uuid,
    /// Owner's display name captured at submission; not updated afterwards
    pub owner_name: String,
    pub created_at: NaiveDate,
}

impl Innovation {
    /// Create a record owned by `owner`, dated today (UTC).
    pub fn new(new: NewInnovation, owner: &Identity) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            field: new.field,
            owner_id: owner.id,
            owner_name: owner.name.clone(),
            created_at: Utc::now().date_naive(),
        }
    }

    /// Case-insensitive substring match against title, description or field.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        let needle = needle.as_str();
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .field
                .as_deref()
                .is_some_and(|f| f.to_lowercase().contains(needle))
    }
}
