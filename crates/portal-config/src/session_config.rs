use crate::{ConfigError, ConfigErrorResult, DEFAULT_CACHE_DIR, DEFAULT_CACHE_FILE};

use std::path::{Component, Path};

use serde::Deserialize;

/// Where the durable identity snapshot lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory relative to the config dir
    pub cache_dir: String,
    pub cache_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cache_dir: String::from(DEFAULT_CACHE_DIR),
            cache_file: String::from(DEFAULT_CACHE_FILE),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let dir = Path::new(&self.cache_dir);
        if dir.is_absolute() || self.cache_dir.contains("..") {
            return Err(ConfigError::session(
                "session.cache_dir must be relative and cannot contain '..'",
            ));
        }

        let file = Path::new(&self.cache_file);
        let is_plain_name = matches!(
            file.components().collect::<Vec<_>>().as_slice(),
            [Component::Normal(_)]
        );
        if !is_plain_name {
            return Err(ConfigError::session(format!(
                "session.cache_file must be a plain file name, got '{}'",
                self.cache_file
            )));
        }

        Ok(())
    }
}
