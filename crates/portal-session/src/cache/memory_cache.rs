use crate::cache::{CacheResult, CachedIdentity, IdentityCache, LoadResult};

use portal_core::Identity;

/// In-process cache holding the serialized snapshot.
///
/// Goes through the same JSON encoding as the file cache, so a value moved
/// from one manager to the next behaves like a restart on the same device.
#[derive(Debug, Clone, Default)]
pub struct MemoryIdentityCache {
    slot: Option<String>,
}

impl MemoryIdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with raw slot contents, well-formed or not.
    pub fn with_raw(contents: impl Into<String>) -> Self {
        Self {
            slot: Some(contents.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl IdentityCache for MemoryIdentityCache {
    fn load(&self) -> CacheResult<LoadResult> {
        let Some(contents) = self.slot.as_deref() else {
            return Ok(LoadResult::empty());
        };

        Ok(match CachedIdentity::parse(contents) {
            Ok(cached) => LoadResult::found(cached.identity),
            Err(e) => LoadResult::corrupted(e),
        })
    }

    fn save(&mut self, identity: &Identity) -> CacheResult<()> {
        let json = serde_json::to_string(&CachedIdentity::new(identity.clone()))?;
        self.slot = Some(json);
        Ok(())
    }

    fn clear(&mut self) -> CacheResult<()> {
        self.slot = None;
        Ok(())
    }
}
