//! Output writers for aggregation results.
//!
//! This module handles:
//! - JSON reports (versioned envelope) and bare edge-map snapshots
//! - Terminal summaries

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{pair_call_map_to_string, read_report, write_pair_call_map, write_report, Report};
pub use text::{render_delta, render_family, render_profile};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
