//! RPM-style package version comparison
//!
//! Versions are written as `epoch:version-release`. The epoch is split on the
//! first `:` and the release on the last `-`; a missing epoch means `0` and a
//! missing release is the empty string.
//!
//! Ordering follows `rpmvercmp`: the epoch decides first (numerically), then
//! the version and release are compared segment by segment with
//! [`compare_segments`].

mod segment;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

pub use segment::compare_segments;
use segment::compare_numeric;

/// Errors raised while parsing a version string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("invalid epoch '{epoch}' in version '{input}': epoch must be a non-negative integer")]
    InvalidEpoch { input: String, epoch: String },
}

/// A parsed `epoch:version-release` triple
///
/// Equality and ordering use comparison semantics, so `0:1.01-1` and
/// `1.1-1` are equal even though they are spelled differently.
#[derive(Debug, Clone)]
pub struct Evr {
    epoch: String,
    version: String,
    release: String,
}

impl Evr {
    /// Parse a version string
    pub fn parse(input: &str) -> Result<Self, VersionParseError> {
        let (epoch, rest) = match input.split_once(':') {
            Some((epoch, rest)) => (epoch, rest),
            None => ("", input),
        };
        let (version, release) = rest.rsplit_once('-').unwrap_or((rest, ""));

        let epoch = if epoch.is_empty() { "0" } else { epoch };
        if !epoch.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VersionParseError::InvalidEpoch {
                input: input.to_string(),
                epoch: epoch.to_string(),
            });
        }

        Ok(Self {
            epoch: epoch.to_string(),
            version: version.to_string(),
            release: release.to_string(),
        })
    }
}

impl Ord for Evr {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_numeric(&self.epoch, &other.epoch)
            .then_with(|| compare_segments(&self.version, &other.version))
            .then_with(|| compare_segments(&self.release, &other.release))
    }
}

impl PartialOrd for Evr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evr {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evr {}

impl fmt::Display for Evr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.epoch, self.version, self.release)
    }
}

impl std::str::FromStr for Evr {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse and compare two raw version strings
pub fn compare_evr(a: &str, b: &str) -> Result<Ordering, VersionParseError> {
    Ok(Evr::parse(a)?.cmp(&Evr::parse(b)?))
}
