//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod average;
pub mod diff;
pub mod family;
pub mod flatten;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use average::execute_average;
pub use diff::execute_diff;
pub use family::execute_family;
pub use flatten::{execute_flatten, read_snapshots};
pub use models::{AverageArgs, DiffArgs, FamilyArgs, FlattenArgs};
pub use utils::{display_fields, display_version};
