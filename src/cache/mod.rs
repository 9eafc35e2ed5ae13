//! Response cache for branch exports
//!
//! Fetched export documents are kept verbatim, one file per branch, so that
//! repeated runs do not download the (large) package lists again.
//!
//! ## Cache Structure
//!
//! ```text
//! ~/.cache/branch-diff/
//! ├── p10.json
//! └── sisyphus.json
//! ```
//!
//! The diff engine never touches the cache; the fetch layer is handed a
//! [`ResponseCache`] and decides when to load and store.

mod file;
mod paths;

pub use file::FileCache;
pub use paths::{cache_dir, cache_key};

use crate::error::Result;

/// Key-value storage for raw response bodies
pub trait ResponseCache {
    /// Return the stored body for `key`, if any
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `body` under `key`, replacing any previous value
    fn store(&self, key: &str, body: &str) -> Result<()>;
}

/// Write-only view over another cache: never hits, but still stores.
///
/// Used for `--no-cache`, which skips reading but refreshes the stored copy.
#[derive(Debug)]
pub struct Refresh<C>(pub C);

impl<C: ResponseCache> ResponseCache for Refresh<C> {
    fn load(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn store(&self, key: &str, body: &str) -> Result<()> {
        self.0.store(key, body)
    }
}

impl<C: ResponseCache + ?Sized> ResponseCache for Box<C> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn store(&self, key: &str, body: &str) -> Result<()> {
        (**self).store(key, body)
    }
}
