//! Fetch layer: branch exports from the package database
//!
//! A [`Fetcher`] pairs a [`SnapshotSource`] (normally [`HttpSource`]) with a
//! [`ResponseCache`]. A cache hit skips the network entirely; on a miss the
//! body is downloaded, validated and written back to the cache.

mod http;

pub use http::HttpSource;

use tracing::{info, warn};

use crate::cache::ResponseCache;
use crate::domain::BranchSnapshot;
use crate::error::{Result, snapshot_parse_failed};

/// Somewhere raw export documents can be retrieved from
pub trait SnapshotSource {
    /// Return the raw JSON export for `branch`.
    ///
    /// A non-success response must be an error.
    fn fetch_raw(&self, branch: &str) -> Result<String>;
}

/// Loads branch snapshots through a cache
pub struct Fetcher<S, C> {
    source: S,
    cache: C,
}

impl<S: SnapshotSource, C: ResponseCache> Fetcher<S, C> {
    pub fn new(source: S, cache: C) -> Self {
        Self { source, cache }
    }

    /// Load the snapshot for `branch`
    pub fn fetch(&self, branch: &str) -> Result<BranchSnapshot> {
        info!(branch, "requesting");

        if let Some(body) = self.cache.load(branch)? {
            return parse(branch, &body);
        }

        let body = self.source.fetch_raw(branch)?;
        let snapshot = parse(branch, &body)?;
        self.cache.store(branch, &body)?;

        info!(branch, packages = snapshot.len(), "fetched");
        Ok(snapshot)
    }
}

fn parse(branch: &str, body: &str) -> Result<BranchSnapshot> {
    let snapshot =
        BranchSnapshot::from_json(body).map_err(|e| snapshot_parse_failed(branch, e))?;
    if snapshot.is_empty() {
        warn!(branch, "export lists no packages");
    }
    Ok(snapshot)
}
