//! File-backed response cache

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{ResponseCache, cache_key};
use crate::error::{Result, cache_operation_failed, file_read_failed, file_write_failed};

/// Stores each body as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the cache file for `key`
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", cache_key(key)))
    }
}

impl ResponseCache for FileCache {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        if !path.is_file() {
            debug!(key, path = %path.display(), "cache miss");
            return Ok(None);
        }

        let body =
            fs::read_to_string(&path).map_err(|e| file_read_failed(path.display().to_string(), e))?;
        info!(key, path = %path.display(), "cache hit");
        Ok(Some(body))
    }

    fn store(&self, key: &str, body: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            cache_operation_failed(format!(
                "Failed to create cache directory {}: {e}",
                self.dir.display()
            ))
        })?;

        let path = self.entry_path(key);
        let write_err = |e: &dyn std::fmt::Display| file_write_failed(path.display().to_string(), e);

        // Write next to the target so the rename stays on one file system
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| write_err(&e))?;
        tmp.write_all(body.as_bytes()).map_err(|e| write_err(&e))?;
        tmp.persist(&path).map_err(|e| write_err(&e.error))?;

        info!(key, path = %path.display(), bytes = body.len(), "stored response in cache");
        Ok(())
    }
}
