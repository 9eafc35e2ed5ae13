//! Command implementations for the branch-diff CLI

pub mod diff;
