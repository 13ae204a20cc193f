//! Identity - a registered participant of the portal.

use crate::Role;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered participant.
///
/// Never carries the credential: this is the shape handed to callers once
/// authenticated and the shape written to the session cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    /// Unique across the directory, compared case-sensitively
    pub email: String,
    pub role: Role,
}

impl Identity {
    /// Create a new identity with a fresh id
    pub fn new(name: String, email: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            role,
        }
    }

    pub fn is_contributor(&self) -> bool {
        self.role == Role::Contributor
    }
}
