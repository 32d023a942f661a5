//! CLI command definitions.

pub mod list;
pub mod serve;
