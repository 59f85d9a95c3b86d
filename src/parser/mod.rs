//! Snapshot parsing and data model definitions.
//!
//! This module handles:
//! - Parsing edge keys ("parent==>child")
//! - Loading raw XHProf snapshots into edge maps
//! - Defining the shared data model

pub mod edge_key;
pub mod schema;
pub mod xhprof;

// Re-export main types
pub use edge_key::{pair_name, parse_pair_name, EdgeKey};
pub use schema::{Call, NearestFamily, PairCall, PairCallMap, Profile};
pub use xhprof::{parse_snapshot, parse_snapshot_str, read_snapshot};
