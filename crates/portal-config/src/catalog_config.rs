use crate::{DEFAULT_ENFORCE_CONTRIBUTOR_ROLE, DEFAULT_SEED_DEMO_DATA};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Seed the demo accounts and innovations at startup
    pub seed_demo_data: bool,
    /// Reject submissions from explorers
    pub enforce_contributor_role: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: DEFAULT_SEED_DEMO_DATA,
            enforce_contributor_role: DEFAULT_ENFORCE_CONTRIBUTOR_ROLE,
        }
    }
}
