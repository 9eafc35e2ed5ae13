//! Fetch errors

use super::BranchDiffError;

/// Creates an error for a non-success HTTP status
pub fn status_failed(branch: impl Into<String>, status: u16) -> BranchDiffError {
    BranchDiffError::FetchFailed {
        branch: branch.into(),
        status,
    }
}

/// Creates an error for a request that never produced a response
pub fn request_failed(branch: impl Into<String>, reason: impl ToString) -> BranchDiffError {
    BranchDiffError::RequestFailed {
        branch: branch.into(),
        reason: reason.to_string(),
    }
}

/// Creates an error for a body that is not a package export
pub fn parse_failed(branch: impl Into<String>, reason: impl ToString) -> BranchDiffError {
    BranchDiffError::SnapshotParseFailed {
        branch: branch.into(),
        reason: reason.to_string(),
    }
}
