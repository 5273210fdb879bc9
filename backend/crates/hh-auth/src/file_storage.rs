use crate::{AuthError, LoadResult, Result as AuthErrorResult, SessionStorage};

use hh_core::Identity;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const RECORD_EXTENSION: &str = "json";

/// Stores the session record as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>, key: &str) -> Self {
        let dir = dir.into();
        let path = dir.join(format!("{key}.{RECORD_EXTENSION}"));
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.dir.join(format!("{name}.tmp.{}", std::process::id()))
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> AuthErrorResult<LoadResult> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No session record at {:?}", self.path);
                return Ok(LoadResult::empty());
            }
            Err(e) => return Err(AuthError::storage_read(self.path.clone(), e)),
        };

        let result = LoadResult::from_record(&contents);
        if let Some(ref message) = result.corruption_error {
            warn!("Session record corrupted at {:?}: {message}", self.path);
        }
        Ok(result)
    }

    /// Atomic write: temp file, fsync, rename over the final path.
    fn save(&self, identity: &Identity) -> AuthErrorResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| AuthError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self.temp_path();

        // Pretty printed so the record stays hand-editable
        let json = serde_json::to_string_pretty(identity)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| AuthError::storage_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| AuthError::storage_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| AuthError::storage_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            AuthError::atomic_rename(temp_path.clone(), self.path.clone(), e)
        })?;

        info!("Saved session for {} to {:?}", identity.email, self.path);
        Ok(())
    }

    fn clear(&self) -> AuthErrorResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed session record {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::storage_write(self.path.clone(), e)),
        }
    }
}
