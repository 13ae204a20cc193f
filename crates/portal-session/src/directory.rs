//! Registered identities and their credentials.

use crate::demo;
use crate::{Result as SessionResult, SessionError};

use portal_core::{Identity, Role};

use log::debug;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct DirectoryEntry {
    identity: Identity,
    /// Plaintext, compared for lookup only
    secret: String,
}

/// Append-only list of registered identities.
///
/// Emails are unique and compared exactly as stored (case-sensitive).
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    entries: Vec<DirectoryEntry>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the demo contributor and explorer.
    pub fn with_demo_users() -> Self {
        let entries = [demo::contributor(), demo::explorer()]
            .into_iter()
            .map(|identity| DirectoryEntry {
                identity,
                secret: demo::DEMO_SECRET.to_string(),
            })
            .collect();

        Self { entries }
    }

    pub fn find_by_email_and_secret(&self, email: &str, secret: &str) -> Option<Identity> {
        self.entries
            .iter()
            .find(|entry| entry.identity.email == email && entry.secret == secret)
            .map(|entry| entry.identity.clone())
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<Identity> {
        self.entries
            .iter()
            .find(|entry| entry.identity.id == id)
            .map(|entry| entry.identity.clone())
    }

    pub fn exists(&self, email: &str) -> bool {
        self.entries.iter().any(|entry| entry.identity.email == email)
    }

    /// Registers a new identity with a fresh id.
    #[track_caller]
    pub fn add(
        &mut self,
        name: &str,
        email: &str,
        secret: &str,
        role: Role,
    ) -> SessionResult<Identity> {
        if self.exists(email) {
            return Err(SessionError::email_already_registered(email));
        }

        let identity = Identity::new(name.to_string(), email.to_string(), role);
        self.entries.push(DirectoryEntry {
            identity: identity.clone(),
            secret: secret.to_string(),
        });

        debug!("Directory now holds {} identities", self.entries.len());
        Ok(identity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
