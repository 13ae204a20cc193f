use portal_config::Config;
use portal_config::validation_config::{DEFAULT_MAX_DESCRIPTION_LENGTH, DEFAULT_MAX_TITLE_LENGTH};

/// Submission rules the session manager applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub enforce_contributor_role: bool,
    pub max_title_length: usize,
    pub max_description_length: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            enforce_contributor_role: true,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
        }
    }
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            enforce_contributor_role: config.catalog.enforce_contributor_role,
            max_title_length: config.validation.max_title_length,
            max_description_length: config.validation.max_description_length,
        }
    }
}
