mod property_tests;

use crate::{
    InnovationCatalog, MemoryIdentityCache, SessionManager, SessionSettings, UserDirectory,
};

/// Manager over the demo data with an in-memory cache
pub(crate) fn demo_manager() -> SessionManager<MemoryIdentityCache> {
    SessionManager::new(
        UserDirectory::with_demo_users(),
        InnovationCatalog::with_demo_innovations(),
        MemoryIdentityCache::new(),
        SessionSettings::default(),
    )
}
