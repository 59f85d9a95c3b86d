use crate::utils::config::{DEFAULT_SORT_FIELD, DEFAULT_TOP_CALLS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Arguments for the flatten command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlattenArgs {
    /// Snapshot files to flatten; more than one is averaged first
    pub snapshots: Vec<PathBuf>,

    /// Metric to sort by
    pub sort_field: String,

    /// Number of calls to print
    pub top_calls: usize,

    /// Drop calls below this percentage of the main call (on the sort metric)
    pub min_percent: Option<f64>,

    /// Print a text summary to stdout
    pub summary: bool,

    /// Path to write the profile report JSON
    pub output: Option<PathBuf>,
}

impl Default for FlattenArgs {
    fn default() -> Self {
        Self {
            snapshots: Vec::new(),
            sort_field: DEFAULT_SORT_FIELD.to_string(),
            top_calls: DEFAULT_TOP_CALLS,
            min_percent: None,
            summary: true,
            output: None,
        }
    }
}

/// Arguments for the average command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AverageArgs {
    /// Snapshot files to average
    pub snapshots: Vec<PathBuf>,

    /// Path to write the averaged snapshot
    pub output: Option<PathBuf>,
}

/// Arguments for the diff command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffArgs {
    /// Path to the baseline snapshot
    pub baseline: PathBuf,

    /// Path to the target snapshot
    pub target: PathBuf,

    /// Number of changed edges to print
    pub top_calls: usize,

    /// Print a human-readable summary to the terminal
    pub summary: bool,

    /// Path to write the delta snapshot (target - baseline)
    pub output: Option<PathBuf>,
}

impl Default for DiffArgs {
    fn default() -> Self {
        Self {
            baseline: PathBuf::new(),
            target: PathBuf::new(),
            top_calls: DEFAULT_TOP_CALLS,
            summary: true,
            output: None,
        }
    }
}

/// Arguments for the family command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FamilyArgs {
    /// Snapshot file to inspect
    pub snapshot: PathBuf,

    /// Function whose callers and callees are listed
    pub function: String,

    /// Print a text summary to stdout
    pub summary: bool,

    /// Path to write the family report JSON
    pub output: Option<PathBuf>,
}
