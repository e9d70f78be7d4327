//! Builders that turn configuration and command-line input into scheduler parts.

pub mod batch_builder;
pub mod scheduler_builder;

pub use batch_builder::{build_batch, parse_cli_entry};
pub use scheduler_builder::{build_grid, build_policy, build_scheduler};
