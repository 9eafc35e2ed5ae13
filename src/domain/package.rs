//! Package record and branch snapshot types

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One binary package as listed in a branch export
///
/// `name` is only unique within an architecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub arch: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_epoch")]
    pub epoch: String,
    pub version: String,
    pub release: String,
}

/// The export sends epochs as integers; older dumps used strings.
///
/// Any scalar is kept as text so that a bad epoch only fails the comparison
/// of its own package. `null` reads as empty, which compares as epoch 0.
fn deserialize_epoch<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

impl PackageRecord {
    /// Render as `epoch:version-release`
    pub fn evr_string(&self) -> String {
        format!("{}:{}-{}", self.epoch, self.version, self.release)
    }
}

/// All binary packages of one branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchSnapshot {
    pub packages: Vec<PackageRecord>,
}

impl BranchSnapshot {
    /// Parse an export document (`{"packages": [...]}`)
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Architectures present in this snapshot
    pub fn architectures(&self) -> BTreeSet<&str> {
        self.packages.iter().map(|p| p.arch.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

#[cfg(test)]
impl PackageRecord {
    pub fn new(
        arch: impl Into<String>,
        name: impl Into<String>,
        epoch: impl Into<String>,
        version: impl Into<String>,
        release: impl Into<String>,
    ) -> Self {
        Self {
            arch: arch.into(),
            name: name.into(),
            epoch: epoch.into(),
            version: version.into(),
            release: release.into(),
        }
    }
}

#[cfg(test)]
impl BranchSnapshot {
    pub fn new(packages: Vec<PackageRecord>) -> Self {
        Self { packages }
    }
}
