//! Configuration and constants for the engine and CLI.

/// Token separating caller and callee in an edge key ("parent==>child")
pub const EDGE_SEPARATOR: &str = "==>";

/// Current output report version
pub const REPORT_VERSION: &str = "1.0.0";

/// Metric used when no sort field is given
pub const DEFAULT_SORT_FIELD: &str = "WallTime";

/// Number of calls shown in terminal summaries
pub const DEFAULT_TOP_CALLS: usize = 20;

// Averaging more snapshots than this in one run is allowed but logged
pub const MAX_REASONABLE_SNAPSHOTS: usize = 10_000;

