//! Newest-first catalog of submitted innovations.

use crate::demo;

use portal_core::{Identity, Innovation, NewInnovation};

use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct InnovationCatalog {
    /// Newest first
    items: Vec<Innovation>,
}

impl InnovationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demo_innovations() -> Self {
        Self {
            items: demo::innovations(),
        }
    }

    /// Adds a record owned by `owner` at the front of the catalog.
    ///
    /// The owner's name is copied into the record; renaming the owner later
    /// leaves earlier submissions untouched.
    pub fn submit(&mut self, new: NewInnovation, owner: &Identity) -> Innovation {
        let innovation = Innovation::new(new, owner);
        self.items.insert(0, innovation.clone());
        innovation
    }

    /// Case-insensitive substring search over title, description and field.
    ///
    /// A blank keyword matches nothing.
    pub fn search(&self, keyword: &str) -> Vec<Innovation> {
        let needle = keyword.trim();
        if needle.is_empty() {
            return Vec::new();
        }

        self.items
            .iter()
            .filter(|innovation| innovation.matches(needle))
            .cloned()
            .collect()
    }

    pub fn list_all(&self) -> &[Innovation] {
        &self.items
    }

    pub fn list_by_owner(&self, owner_id: Uuid) -> Vec<Innovation> {
        self.items
            .iter()
            .filter(|innovation| innovation.owner_id == owner_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
