//! Per-architecture package index

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::domain::BranchSnapshot;

/// Package names and version strings of one snapshot, grouped by architecture
#[derive(Debug, Default)]
pub struct PerArchIndex {
    names: BTreeMap<String, BTreeSet<String>>,
    versions: BTreeMap<String, BTreeMap<String, String>>,
}

impl PerArchIndex {
    /// Build the index for a snapshot.
    ///
    /// If an `(arch, name)` pair occurs more than once, the last record wins.
    pub fn build(snapshot: &BranchSnapshot) -> Self {
        let mut index = Self::default();

        for pkg in &snapshot.packages {
            index
                .names
                .entry(pkg.arch.clone())
                .or_default()
                .insert(pkg.name.clone());

            let previous = index
                .versions
                .entry(pkg.arch.clone())
                .or_default()
                .insert(pkg.name.clone(), pkg.evr_string());

            if let Some(previous) = previous {
                debug!(
                    arch = %pkg.arch,
                    name = %pkg.name,
                    dropped = %previous,
                    kept = %pkg.evr_string(),
                    "duplicate package record, keeping the last one"
                );
            }
        }

        index
    }

    pub fn arches(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    /// Names for `arch`, `None` if the snapshot has no such arch
    pub fn names(&self, arch: &str) -> Option<&BTreeSet<String>> {
        self.names.get(arch)
    }

    pub fn versions(&self, arch: &str) -> Option<&BTreeMap<String, String>> {
        self.versions.get(arch)
    }

    pub fn version(&self, arch: &str, name: &str) -> Option<&str> {
        self.versions
            .get(arch)
            .and_then(|by_name| by_name.get(name))
            .map(String::as_str)
    }
}
