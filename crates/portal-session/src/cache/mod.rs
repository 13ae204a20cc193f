//! Durable per-device slot holding the current identity snapshot.

pub(crate) mod cached_identity;
pub(crate) mod error;
pub(crate) mod file_cache;
pub(crate) mod load_result;
pub(crate) mod memory_cache;

pub use cached_identity::{CURRENT_SCHEMA_VERSION, CachedIdentity};
pub use error::{CacheError, Result as CacheResult};
pub use file_cache::FileIdentityCache;
pub use load_result::LoadResult;
pub use memory_cache::MemoryIdentityCache;

use portal_core::Identity;

/// Storage for the single identity snapshot used to rehydrate a session.
pub trait IdentityCache {
    /// Reads the snapshot.
    ///
    /// A missing or malformed snapshot is not an error; see [`LoadResult`].
    fn load(&self) -> CacheResult<LoadResult>;

    /// Replaces the snapshot with `identity`.
    fn save(&mut self, identity: &Identity) -> CacheResult<()>;

    /// Removes the snapshot. Clearing an empty cache succeeds.
    fn clear(&mut self) -> CacheResult<()>;

    /// Gets a malformed snapshot out of the way so the next load starts clean.
    fn discard_corrupted(&mut self) -> CacheResult<()> {
        self.clear()
    }
}
