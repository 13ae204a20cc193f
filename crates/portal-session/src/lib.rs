pub mod cache;
pub mod catalog;
pub mod demo;
pub mod directory;
pub mod error;
pub mod logger;
pub mod session;
pub mod session_settings;

pub use cache::{
    CacheError, CacheResult, CachedIdentity, FileIdentityCache, IdentityCache, LoadResult,
    MemoryIdentityCache,
};
pub use catalog::InnovationCatalog;
pub use directory::UserDirectory;
pub use error::{Result, SessionError};
pub use session::SessionManager;
pub use session_settings::SessionSettings;

#[cfg(test)]
mod tests;
