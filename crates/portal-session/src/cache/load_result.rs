use portal_core::Identity;

/// Result of loading the snapshot - distinguishes "not found" from corruption.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadResult {
    pub identity: Option<Identity>,
    /// Present if a snapshot exists but could not be parsed
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn found(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            corruption_error: None,
        }
    }

    pub fn corrupted(message: impl Into<String>) -> Self {
        Self {
            identity: None,
            corruption_error: Some(message.into()),
        }
    }

    pub fn is_corrupted(&self) -> bool {
        self.corruption_error.is_some()
    }
}
