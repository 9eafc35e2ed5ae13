//! Cache errors

use super::BranchDiffError;

/// Creates a cache operation failed error
pub fn operation_failed(message: impl Into<String>) -> BranchDiffError {
    BranchDiffError::CacheOperationFailed {
        message: message.into(),
    }
}
