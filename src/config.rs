//! Run configuration
//!
//! Everything the fetch layer needs is resolved once from the command line
//! (and its environment fallbacks) into a [`Config`] and passed down
//! explicitly.

use std::path::PathBuf;
use std::time::Duration;

use crate::cache;
use crate::cli::Cli;
use crate::error::{Result, config_invalid};

/// Export endpoint of the ALT Linux package database
pub const DEFAULT_BASE_URL: &str = "https://rdb.altlinux.org/api/export/branch_binary_packages/";

pub const DEFAULT_STABLE_BRANCH: &str = "p10";

pub const DEFAULT_DEV_BRANCH: &str = "sisyphus";

/// Full branch exports are tens of megabytes
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub stable_branch: String,
    pub dev_branch: String,
    pub cache_dir: PathBuf,
    pub use_cache: bool,
    pub timeout: Duration,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cache_dir = match &cli.cache_dir {
            Some(dir) => dir.clone(),
            None => cache::cache_dir()?,
        };

        let stable_branch = validate_branch("stable", &cli.stable)?;
        let dev_branch = validate_branch("dev", &cli.dev)?;
        if stable_branch == dev_branch {
            return Err(config_invalid(format!(
                "stable and dev branch must differ, both are '{stable_branch}'"
            )));
        }

        Ok(Self {
            base_url: normalize_base_url(&cli.base_url)?,
            stable_branch,
            dev_branch,
            cache_dir,
            use_cache: !cli.no_cache,
            timeout: DEFAULT_TIMEOUT,
        })
    }
}

/// Require an http(s) URL and make sure it ends with `/`
fn normalize_base_url(url: &str) -> Result<String> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(config_invalid(format!(
            "base URL must start with http:// or https://, got '{url}'"
        )));
    }

    if url.ends_with('/') {
        Ok(url.to_string())
    } else {
        Ok(format!("{url}/"))
    }
}

/// A branch name doubles as its cache file name, so it must already be a
/// valid cache key. Otherwise two branches could share one cache entry.
fn validate_branch(role: &str, name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(config_invalid(format!("{role} branch name must not be empty")));
    }
    if cache::cache_key(name) != name {
        return Err(config_invalid(format!(
            "{role} branch name '{name}' is not a valid file name \
             (no path separators, control characters or : * ? \" < > |, \
             no leading or trailing '.' or '-')"
        )));
    }
    Ok(name.to_string())
}
