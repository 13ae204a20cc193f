use portal_core::Identity;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// On-disk snapshot of the authenticated identity. Never holds the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedIdentity {
    #[serde(flatten)]
    pub identity: Identity,
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
}

impl CachedIdentity {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            schema_version: CURRENT_SCHEMA_VERSION,
            saved_at: Utc::now(),
        }
    }

    /// Parses a snapshot, rejecting schemas newer than this build understands.
    pub fn parse(contents: &str) -> Result<Self, String> {
        let cached: Self = serde_json::from_str(contents).map_err(|e| e.to_string())?;
        if cached.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(format!(
                "unsupported schema version {} (max {})",
                cached.schema_version, CURRENT_SCHEMA_VERSION
            ));
        }
        Ok(cached)
    }
}
