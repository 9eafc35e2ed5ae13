//! Cache path utilities

use std::path::PathBuf;

use crate::error::{BranchDiffError, Result};

/// Default cache directory name under user's cache directory
const CACHE_DIR: &str = "branch-diff";

/// Environment variable overriding the cache location
pub const CACHE_DIR_ENV: &str = "BRANCH_DIFF_CACHE_DIR";

/// Characters that must not appear in a cache file name
const PATH_UNSAFE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Get the default cache directory path
///
/// Uses the platform's standard cache location with a `branch-diff`
/// subdirectory. Can be overridden with the `BRANCH_DIFF_CACHE_DIR`
/// environment variable.
pub fn cache_dir() -> Result<PathBuf> {
    if let Ok(cache_dir) = std::env::var(CACHE_DIR_ENV) {
        return Ok(PathBuf::from(cache_dir));
    }

    let base = dirs::cache_dir().ok_or_else(|| BranchDiffError::CacheOperationFailed {
        message: "Could not determine cache directory".to_string(),
    })?;

    Ok(base.join(CACHE_DIR))
}

/// Convert a branch name into a file-name-safe cache key
pub fn cache_key(branch: &str) -> String {
    let key: String = branch
        .chars()
        .map(|c| {
            if PATH_UNSAFE_CHARS.contains(&c) || c.is_control() {
                '-'
            } else {
                c
            }
        })
        .collect();

    let key = key.trim_matches(|c| c == '-' || c == '.');

    if key.is_empty() {
        "unknown".to_string()
    } else {
        key.to_string()
    }
}
