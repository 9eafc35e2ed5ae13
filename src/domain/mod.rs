//! Domain models for branch-diff
//!
//! Package records and branch snapshots as delivered by the package database
//! export. These types carry no I/O and are never mutated after loading.

pub mod package;

pub use package::BranchSnapshot;
