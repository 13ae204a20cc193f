#![allow(dead_code)]

use portal_config::Config;
use portal_session::{
    FileIdentityCache, InnovationCatalog, SessionManager, SessionSettings, UserDirectory,
};

use std::env;
use std::path::Path;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config dir with PORTAL_CONFIG_DIR pointing at it
pub fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("PORTAL_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Loads and validates config from the current PORTAL_CONFIG_DIR
pub fn load_config() -> Config {
    let config = Config::load().unwrap();
    config.validate().unwrap();
    config
}

/// Demo-seeded manager over a file cache at `path`, as a fresh process would build it
pub fn start_process(path: &Path) -> SessionManager<FileIdentityCache> {
    SessionManager::new(
        UserDirectory::with_demo_users(),
        InnovationCatalog::with_demo_innovations(),
        FileIdentityCache::new(path),
        SessionSettings::default(),
    )
}
