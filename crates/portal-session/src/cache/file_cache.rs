use crate::cache::{CacheError, CacheResult, CachedIdentity, IdentityCache, LoadResult};

use portal_core::Identity;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Identity snapshot stored as a JSON file on the local device.
#[derive(Debug, Clone)]
pub struct FileIdentityCache {
    path: PathBuf,
}

impl FileIdentityCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("identity.json"))
    }

    fn dir(&self) -> PathBuf {
        self.path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Backs up a corrupted snapshot for debugging.
    ///
    /// Renames `identity.json` to `identity.json.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self) -> CacheResult<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir()
            .join(format!("{}.corrupted.{timestamp}", self.file_name()));

        fs::rename(&self.path, &backup_path).map_err(CacheError::backup_failed)?;

        warn!("Backed up corrupted identity snapshot to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

impl IdentityCache for FileIdentityCache {
    /// Returns:
    /// - `LoadResult { identity: Some(...), .. }` - loaded successfully
    /// - `LoadResult { identity: None, corruption_error: None }` - no snapshot yet
    /// - `LoadResult { identity: None, corruption_error: Some(...) }` - snapshot is corrupted
    fn load(&self) -> CacheResult<LoadResult> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No identity snapshot at {:?}", self.path);
                return Ok(LoadResult::empty());
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!("Identity snapshot is not UTF-8 at {:?}: {e}", self.path);
                return Ok(LoadResult::corrupted(e.to_string()));
            }
            Err(e) => return Err(CacheError::file_read(self.path.clone(), e)),
        };

        match CachedIdentity::parse(&contents) {
            Ok(cached) => {
                info!(
                    "Loaded identity snapshot: {} (schema v{})",
                    cached.identity.id, cached.schema_version
                );
                Ok(LoadResult::found(cached.identity))
            }
            Err(e) => {
                warn!("Identity snapshot corrupted at {:?}: {e}", self.path);
                Ok(LoadResult::corrupted(e))
            }
        }
    }

    /// Saves using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn save(&mut self, identity: &Identity) -> CacheResult<()> {
        let dir = self.dir();
        fs::create_dir_all(&dir).map_err(|e| CacheError::dir_creation(dir.clone(), e))?;

        let temp_path = dir.join(format!("{}.tmp.{}", self.file_name(), std::process::id()));

        let json = serde_json::to_string_pretty(&CachedIdentity::new(identity.clone()))?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| CacheError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| CacheError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| CacheError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            CacheError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        info!("Saved identity snapshot: {}", identity.id);
        Ok(())
    }

    fn clear(&mut self) -> CacheResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared identity snapshot at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::file_remove(self.path.clone(), e)),
        }
    }

    fn discard_corrupted(&mut self) -> CacheResult<()> {
        self.backup_corrupted().map(|_| ())
    }
}
