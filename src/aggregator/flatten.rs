//! Flatten an edge map into a per-function profile.
//!
//! Inclusive cost of a function is the sum over every edge that calls it.
//! Exclusive cost is inclusive minus the sum over every edge it calls out through.
//!
//! Example:
//! `{"main()": 1000, "main()==>foo": 500, "foo==>bar": 200}` (wall time)
//! gives main() 1000/500, foo 500/300, bar 200/200 (inclusive/exclusive).

use crate::parser::{Call, EdgeKey, PairCall, PairCallMap, Profile};
use log::{debug, warn};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};

/// Flatten one snapshot into a profile
///
/// **Public** - main entry point for per-function metrics
///
/// # Arguments
/// * `map` - Edge map to flatten (not modified)
///
/// # Returns
/// Profile with one `Call` per distinct function name, ascending by name.
/// Root names are recorded in `Profile::roots`; use `Profile::main` to get
/// the single root call.
///
/// # Algorithm
/// 1. Parse every key once
/// 2. Sum edge costs per child (inclusive) and per parent (outgoing)
/// 3. Exclusive = inclusive - outgoing, IoTime = wall - cpu
pub fn flatten(map: &PairCallMap) -> Profile {
    debug!("Flattening edge map with {} edges", map.len());

    // Sorted so float sums do not depend on hash order
    let mut edges: Vec<(&String, &PairCall)> = map.iter().collect();
    edges.sort_by(|a, b| a.0.cmp(b.0));

    let mut inclusive: BTreeMap<&str, PairCall> = BTreeMap::new();
    let mut outgoing: HashMap<&str, PairCall> = HashMap::new();
    let mut roots: Vec<String> = Vec::new();

    for (key, call) in edges {
        let edge = EdgeKey::parse(key);

        *inclusive.entry(edge.child).or_default() += *call;

        match edge.parent {
            Some(parent) => *outgoing.entry(parent).or_default() += *call,
            None => roots.push(edge.child.to_string()),
        }
    }

    // A caller that is never called itself still gets a node, with zero inclusive cost
    for parent in outgoing.keys() {
        if !inclusive.contains_key(parent) {
            warn!("Function '{}' calls others but is never called itself", parent);
            inclusive.insert(*parent, PairCall::default());
        }
    }

    let calls: Vec<Call> = inclusive
        .into_iter()
        .map(|(name, incl)| {
            let out = outgoing.get(name).copied().unwrap_or_default();
            build_call(name, incl, out)
        })
        .collect();

    roots.sort();
    if roots.len() != 1 {
        debug!("Edge map has {} root calls", roots.len());
    }

    debug!("Flattened into {} calls", calls.len());

    Profile { calls, roots }
}

/// Flatten many snapshots in parallel
///
/// **Public** - fan-out step for batch processing; output order matches input order
pub fn flatten_all(maps: &[PairCallMap]) -> Vec<Profile> {
    debug!("Flattening {} snapshots in parallel", maps.len());
    maps.par_iter().map(flatten).collect()
}

/// Build a call node from its inclusive and outgoing totals
///
/// **Private** - internal conversion
fn build_call(name: &str, inclusive: PairCall, outgoing: PairCall) -> Call {
    let exclusive = inclusive - outgoing;

    Call {
        name: name.to_string(),
        count: inclusive.count,
        wall_time: inclusive.wall_time,
        exclusive_wall_time: exclusive.wall_time,
        cpu_time: inclusive.cpu_time,
        exclusive_cpu_time: exclusive.cpu_time,
        memory: inclusive.memory,
        exclusive_memory: exclusive.memory,
        io_time: inclusive.wall_time - inclusive.cpu_time,
        exclusive_io_time: exclusive.wall_time - exclusive.cpu_time,
    }
}

impl PairCallMap {
    /// Flatten this snapshot; see [`flatten`]
    pub fn flatten(&self) -> Profile {
        flatten(self)
    }
}
