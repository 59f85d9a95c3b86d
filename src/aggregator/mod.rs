//! Aggregation of edge maps into profiles, averages, deltas and neighborhoods.
//!
//! Every operation here is pure: inputs are borrowed, outputs are new values.
//! - Flatten (edge map -> per-function profile)
//! - Ordering and lookups over profiles
//! - Average / subtract reducers over several edge maps
//! - Nearest family of one function

pub mod family;
pub mod flatten;
pub mod ordering;
pub mod profile;
pub mod reducers;

// Re-export main types and functions
pub use family::compute_nearest_family;
pub use flatten::{flatten, flatten_all};
pub use ordering::MetricField;
pub use reducers::{average, subtract};
