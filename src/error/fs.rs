//! File system errors

use super::BranchDiffError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl ToString) -> BranchDiffError {
    BranchDiffError::FileReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl ToString) -> BranchDiffError {
    BranchDiffError::FileWriteFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}
