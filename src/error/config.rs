//! Configuration errors

use super::BranchDiffError;

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> BranchDiffError {
    BranchDiffError::ConfigInvalid {
        message: message.into(),
    }
}
