//! Branch diff engine
//!
//! Compares two branch snapshots architecture by architecture:
//!
//! - names present on only one side (`unique_to_stable` / `unique_to_dev`)
//! - names present on both sides where the development version is newer
//!   (`upgraded_in_dev`)
//!
//! The computation is pure. A version that fails to parse only drops that one
//! package from the upgrade check; it is reported in `skipped`.

mod index;
mod result;


use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::warn;

use crate::domain::BranchSnapshot;
use crate::version::compare_evr;

pub use index::PerArchIndex;
pub use result::{DiffResult, SkippedComparison};

/// Compare a stable snapshot against a development snapshot
pub fn compute_diff(stable: &BranchSnapshot, dev: &BranchSnapshot) -> DiffResult {
    let stable_index = PerArchIndex::build(stable);
    let dev_index = PerArchIndex::build(dev);

    let arches: BTreeSet<&str> = stable_index.arches().chain(dev_index.arches()).collect();

    let mut result = DiffResult::default();

    for arch in arches {
        result.unique_to_stable.insert(
            arch.to_string(),
            names_only_in(&stable_index, &dev_index, arch),
        );
        result.unique_to_dev.insert(
            arch.to_string(),
            names_only_in(&dev_index, &stable_index, arch),
        );
    }

    for arch in dev_index.arches() {
        let Some(dev_versions) = dev_index.versions(arch) else {
            continue;
        };

        for (name, dev_version) in dev_versions {
            let Some(stable_version) = stable_index.version(arch, name) else {
                continue;
            };

            match compare_evr(stable_version, dev_version) {
                Ok(Ordering::Less) => result
                    .upgraded_in_dev
                    .entry(arch.to_string())
                    .or_default()
                    .push(name.clone()),
                Ok(_) => {}
                Err(e) => {
                    warn!(arch, name = %name, error = %e, "skipping version comparison");
                    result.skipped.push(SkippedComparison {
                        arch: arch.to_string(),
                        name: name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    result
}

/// Names in `left` for `arch` that `right` does not have
fn names_only_in(left: &PerArchIndex, right: &PerArchIndex, arch: &str) -> Vec<String> {
    let Some(left_names) = left.names(arch) else {
        return Vec::new();
    };

    match right.names(arch) {
        Some(right_names) => left_names.difference(right_names).cloned().collect(),
        None => left_names.iter().cloned().collect(),
    }
}
