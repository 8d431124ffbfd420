//! CLI command implementations

pub mod collections;
pub mod list;
