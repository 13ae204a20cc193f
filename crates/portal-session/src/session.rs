//! The single "who is acting" state and every operation that depends on it.

use crate::cache::{FileIdentityCache, IdentityCache};
use crate::{
    InnovationCatalog, Result as SessionResult, SessionError, SessionSettings, UserDirectory,
};

use portal_config::Config;
use portal_core::{Identity, Innovation, NewInnovation, Role};

use log::{info, warn};

/// Owns the directory, the catalog and the current session.
///
/// Two states: anonymous (`current_user()` is `None`) and authenticated.
/// Cache failures are logged and never change the outcome of an operation;
/// the in-memory session is authoritative.
#[derive(Debug)]
pub struct SessionManager<C: IdentityCache> {
    directory: UserDirectory,
    catalog: InnovationCatalog,
    cache: C,
    settings: SessionSettings,
    current: Option<Identity>,
}

impl SessionManager<FileIdentityCache> {
    /// Builds a manager backed by the file cache the config points at.
    ///
    /// Does not restore; call [`SessionManager::restore`] once at startup.
    pub fn from_config(config: &Config) -> SessionResult<Self> {
        config.log_summary();

        let cache = FileIdentityCache::new(config.identity_cache_path()?);

        let (directory, catalog) = if config.catalog.seed_demo_data {
            (
                UserDirectory::with_demo_users(),
                InnovationCatalog::with_demo_innovations(),
            )
        } else {
            (UserDirectory::new(), InnovationCatalog::new())
        };

        Ok(Self::new(
            directory,
            catalog,
            cache,
            SessionSettings::from(config),
        ))
    }
}

impl<C: IdentityCache> SessionManager<C> {
    pub fn new(
        directory: UserDirectory,
        catalog: InnovationCatalog,
        cache: C,
        settings: SessionSettings,
    ) -> Self {
        Self {
            directory,
            catalog,
            cache,
            settings,
            current: None,
        }
    }

    pub fn current_user(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn catalog(&self) -> &InnovationCatalog {
        &self.catalog
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Gives the cache back, e.g. to hand it to the next process.
    pub fn into_cache(self) -> C {
        self.cache
    }

    #[track_caller]
    pub fn login(&mut self, email: &str, secret: &str) -> SessionResult<&Identity> {
        let Some(identity) = self.directory.find_by_email_and_secret(email, secret) else {
            info!("Login failed");
            return Err(SessionError::invalid_credentials());
        };

        info!("Logged in: {} ({})", identity.id, identity.role);
        self.persist(&identity);
        Ok(self.current.insert(identity))
    }

    #[track_caller]
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        secret: &str,
        role: Role,
    ) -> SessionResult<&Identity> {
        for (field, value) in [("Name", name), ("Email", email), ("Password", secret)] {
            if value.trim().is_empty() {
                return Err(SessionError::validation(format!("{field} is required")));
            }
        }

        let identity = match self.directory.add(name, email, secret, role) {
            Ok(identity) => identity,
            Err(e) => {
                info!("Registration rejected: {e}");
                return Err(e);
            }
        };

        info!("Registered: {} ({})", identity.id, identity.role);
        self.persist(&identity);
        Ok(self.current.insert(identity))
    }

    pub fn logout(&mut self) {
        if let Some(identity) = self.current.take() {
            info!("Logged out: {}", identity.id);
        }

        if let Err(e) = self.cache.clear() {
            warn!("Failed to clear identity snapshot: {e} ({})", e.recovery_hint());
        }
    }

    /// Rehydrates the session from the cache without checking credentials.
    ///
    /// An absent, unreadable or malformed snapshot leaves the session
    /// anonymous. A malformed one is discarded.
    pub fn restore(&mut self) -> Option<&Identity> {
        if self.current.is_some() {
            return self.current.as_ref();
        }

        let loaded = match self.cache.load() {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!("Failed to read identity snapshot: {e} ({})", e.recovery_hint());
                return None;
            }
        };

        if let Some(reason) = loaded.corruption_error {
            warn!("Ignoring corrupted identity snapshot: {reason}");
            if let Err(e) = self.cache.discard_corrupted() {
                warn!("Failed to discard identity snapshot: {e} ({})", e.recovery_hint());
            }
            return None;
        }

        let identity = loaded.identity?;
        info!("Restored session: {} ({})", identity.id, identity.role);
        Some(self.current.insert(identity))
    }

    /// Submits an innovation owned by the current user.
    #[track_caller]
    pub fn submit_innovation(&mut self, new: NewInnovation) -> SessionResult<Innovation> {
        let Some(owner) = self.current.as_ref() else {
            return Err(SessionError::not_authenticated());
        };

        if self.settings.enforce_contributor_role && !owner.is_contributor() {
            return Err(SessionError::not_contributor(owner.role));
        }

        let new = self.validate_submission(new)?;
        let innovation = self.catalog.submit(new, owner);

        info!(
            "Innovation submitted: {} by {}",
            innovation.id, innovation.owner_id
        );
        Ok(innovation)
    }

    pub fn search(&self, keyword: &str) -> Vec<Innovation> {
        self.catalog.search(keyword)
    }

    pub fn list_all(&self) -> &[Innovation] {
        self.catalog.list_all()
    }

    /// The current user's own submissions; empty when anonymous.
    pub fn my_innovations(&self) -> Vec<Innovation> {
        self.current
            .as_ref()
            .map(|identity| self.catalog.list_by_owner(identity.id))
            .unwrap_or_default()
    }

    #[track_caller]
    fn validate_submission(&self, new: NewInnovation) -> SessionResult<NewInnovation> {
        let title = new.title.trim();
        let description = new.description.trim();

        if title.is_empty() || description.is_empty() {
            return Err(SessionError::validation("Title and description are required"));
        }

        let title_length = title.chars().count();
        if title_length > self.settings.max_title_length {
            return Err(SessionError::validation(format!(
                "Title must be at most {} characters, got {}",
                self.settings.max_title_length, title_length
            )));
        }

        let description_length = description.chars().count();
        if description_length > self.settings.max_description_length {
            return Err(SessionError::validation(format!(
                "Description must be at most {} characters, got {}",
                self.settings.max_description_length, description_length
            )));
        }

        let field = new
            .field
            .as_deref()
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string);

        Ok(NewInnovation {
            title: title.to_string(),
            description: description.to_string(),
            field,
        })
    }

    fn persist(&mut self, identity: &Identity) {
        if let Err(e) = self.cache.save(identity) {
            warn!("Failed to save identity snapshot: {e} ({})", e.recovery_hint());
        }
    }
}
