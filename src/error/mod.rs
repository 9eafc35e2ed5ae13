//! Error types and handling for branch-diff
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fetch`]: Branch export download errors
//! - [`cache`]: Response cache errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod cache;
pub mod config;
pub mod fetch;
pub mod fs;


pub use cache::operation_failed as cache_operation_failed;
pub use config::invalid as config_invalid;
pub use fetch::{
    parse_failed as snapshot_parse_failed, request_failed, status_failed as fetch_failed,
};
pub use fs::{read_failed as file_read_failed, write_failed as file_write_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for branch-diff operations
#[derive(Error, Diagnostic, Debug)]
pub enum BranchDiffError {
    // Fetch errors
    #[error("Failed to fetch branch '{branch}': HTTP status {status}")]
    #[diagnostic(
        code(branch_diff::fetch::status),
        help("Check that the branch name exists and the export endpoint is reachable")
    )]
    FetchFailed { branch: String, status: u16 },

    #[error("Request for branch '{branch}' failed: {reason}")]
    #[diagnostic(
        code(branch_diff::fetch::request_failed),
        help("Check your network connection and the --base-url value")
    )]
    RequestFailed { branch: String, reason: String },

    #[error("Failed to parse package list for branch '{branch}': {reason}")]
    #[diagnostic(
        code(branch_diff::fetch::parse_failed),
        help("A stale or truncated cache file can cause this; retry with --no-cache")
    )]
    SnapshotParseFailed { branch: String, reason: String },

    // Cache errors
    #[error("Cache operation failed: {message}")]
    #[diagnostic(code(branch_diff::cache::operation_failed))]
    CacheOperationFailed { message: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(branch_diff::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(branch_diff::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(branch_diff::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(branch_diff::fs::io_error))]
    IoError { message: String },

    #[error("Failed to serialize output: {message}")]
    #[diagnostic(code(branch_diff::output::serialize_failed))]
    SerializeFailed { message: String },
}

impl From<std::io::Error> for BranchDiffError {
    fn from(err: std::io::Error) -> Self {
        BranchDiffError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BranchDiffError {
    fn from(err: serde_json::Error) -> Self {
        BranchDiffError::SerializeFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BranchDiffError>;
