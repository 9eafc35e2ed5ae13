//! JSON report of a branch diff
//!
//! Keys are named after the branches, e.g. for `p10` against `sisyphus`:
//!
//! ```json
//! {
//!  "uniq_p10": { "x86_64": ["..."] },
//!  "uniq_sisyphus": { "x86_64": ["..."] },
//!  "version_release_by_arch_more_sisyphus": { "x86_64": ["..."] }
//! }
//! ```
//!
//! A `skipped` list is appended only when some versions could not be compared.

use std::io::Write;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::diff::DiffResult;
use crate::error::Result;

/// A diff together with the branch names it was computed for
pub struct Report<'a> {
    pub stable: &'a str,
    pub dev: &'a str,
    pub diff: &'a DiffResult,
}

impl Report<'_> {
    pub fn unique_to_stable_key(&self) -> String {
        format!("uniq_{}", self.stable)
    }

    pub fn unique_to_dev_key(&self) -> String {
        format!("uniq_{}", self.dev)
    }

    pub fn upgraded_key(&self) -> String {
        format!("version_release_by_arch_more_{}", self.dev)
    }

    /// Write the report as one-space indented JSON followed by a newline
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        let formatter = PrettyFormatter::with_indent(b" ");
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        self.serialize(&mut ser)?;
        writeln!(writer)?;
        Ok(())
    }
}

impl Serialize for Report<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = if self.diff.skipped.is_empty() { 3 } else { 4 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(&self.unique_to_stable_key(), &self.diff.unique_to_stable)?;
        map.serialize_entry(&self.unique_to_dev_key(), &self.diff.unique_to_dev)?;
        map.serialize_entry(&self.upgraded_key(), &self.diff.upgraded_in_dev)?;
        if !self.diff.skipped.is_empty() {
            map.serialize_entry("skipped", &self.diff.skipped)?;
        }
        map.end()
    }
}
