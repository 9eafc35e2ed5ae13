//! Diff output types

use std::collections::BTreeMap;

use serde::Serialize;

/// Package names grouped by architecture
pub type ArchBuckets = BTreeMap<String, Vec<String>>;

/// A shared package whose versions could not be compared
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedComparison {
    pub arch: String,
    pub name: String,
    pub reason: String,
}

/// Result of comparing a stable and a development snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Names only in the stable branch, for every arch seen on either side
    pub unique_to_stable: ArchBuckets,
    /// Names only in the development branch, for every arch seen on either side
    pub unique_to_dev: ArchBuckets,
    /// Names in both branches where development is strictly newer.
    /// Only arches with at least one upgrade are present.
    pub upgraded_in_dev: ArchBuckets,
    /// Shared pairs left out of `upgraded_in_dev` because a version failed to parse
    pub skipped: Vec<SkippedComparison>,
}

impl DiffResult {
    pub fn upgraded_count(&self) -> usize {
        self.upgraded_in_dev.values().map(Vec::len).sum()
    }

    pub fn unique_to_stable_count(&self) -> usize {
        self.unique_to_stable.values().map(Vec::len).sum()
    }

    pub fn unique_to_dev_count(&self) -> usize {
        self.unique_to_dev.values().map(Vec::len).sum()
    }
}
