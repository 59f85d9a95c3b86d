//! Loader for XHProf-style raw snapshots.
//!
//! Accepts either the bare edge map produced by `xhprof_disable()`:
//!
//! ```json
//! { "main()": {"ct": 1, "wt": 1000, "cpu": 400, "mu": 1500},
//!   "main()==>foo": {"ct": 2, "wt": 500, "cpu": 200, "mu": 700} }
//! ```
//!
//! or the same map wrapped in a collector document under a `"profile"` key.

use super::edge_key::EdgeKey;
use super::schema::{PairCall, PairCallMap};
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Key under which collector documents nest the edge map
const WRAPPED_PROFILE_KEY: &str = "profile";

/// Parse a raw snapshot into a `PairCallMap`
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `ParseError::InvalidFormat` - top level is not an object, an edge value is not
///   an object, or an edge carries a non-finite metric
/// * `ParseError::JsonError` - an edge value has fields of the wrong type
pub fn parse_snapshot(raw: &Value) -> Result<PairCallMap, ParseError> {
    let edges = detect_edge_object(raw)?;

    let mut map = PairCallMap::new();
    for (key, value) in edges {
        if !value.is_object() {
            return Err(ParseError::InvalidFormat(format!(
                "Edge '{}' is not an object",
                key
            )));
        }

        let call: PairCall = serde_json::from_value(value.clone())?;
        validate_edge(key, &call)?;

        if EdgeKey::parse(key).is_ambiguous() {
            warn!("Edge key '{}' contains the separator more than once; splitting on the first", key);
        }

        map.insert(key.as_str(), call);
    }

    debug!("Parsed snapshot with {} edges", map.len());

    Ok(map)
}

/// Parse a raw snapshot from a JSON string
pub fn parse_snapshot_str(raw: &str) -> Result<PairCallMap, ParseError> {
    let value: Value = serde_json::from_str(raw)?;
    parse_snapshot(&value)
}

/// Read and parse a raw snapshot file
///
/// **Public** - used by every CLI command
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<PairCallMap, ParseError> {
    let path = path.as_ref();
    debug!("Reading snapshot from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    parse_snapshot_str(&contents)
}

/// Locate the edge object, unwrapping a collector document if present
///
/// **Private** - format detection
fn detect_edge_object(raw: &Value) -> Result<&Map<String, Value>, ParseError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| ParseError::InvalidFormat("Snapshot must be a JSON object".to_string()))?;

    // Edge values carry "ct"/"wt"; a "profile" object without them holds nested edges
    if let Some(Value::Object(inner)) = obj.get(WRAPPED_PROFILE_KEY) {
        if !inner.contains_key("ct") && !inner.contains_key("wt") {
            debug!("Detected wrapped snapshot under '{}'", WRAPPED_PROFILE_KEY);
            return Ok(inner);
        }
    }

    Ok(obj)
}

/// Reject values no snapshot or delta can hold
///
/// **Private** - internal validation
fn validate_edge(key: &str, call: &PairCall) -> Result<(), ParseError> {
    // Only a delta written by `diff` carries negative counts
    if call.count < 0 {
        debug!("Edge '{}' has negative call count {}; treating input as a delta", key, call.count);
    }

    let finite = call.wall_time.is_finite() && call.cpu_time.is_finite() && call.memory.is_finite();
    if !finite {
        return Err(ParseError::InvalidFormat(format!(
            "Edge '{}' has a non-finite metric",
            key
        )));
    }

    Ok(())
}
