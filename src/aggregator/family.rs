//! Nearest-family extraction: direct callers and callees of one function.
//!
//! Only wall time and count are kept per neighbor; this is a cheap
//! neighborhood summary, not a cost breakdown.

use crate::parser::{EdgeKey, NearestFamily, PairCall, PairCallMap};
use log::debug;

/// Collect the direct children and parents of `name`
///
/// **Public** - main entry point for neighborhood views
///
/// A root edge (`"main()"`) counts as a parent edge with an empty caller name.
/// Several edges to the same neighbor are summed.
pub fn compute_nearest_family(map: &PairCallMap, name: &str) -> NearestFamily {
    let mut family = NearestFamily::default();

    for (key, call) in map {
        let edge = EdgeKey::parse(key);
        let projected = call.time_and_count();

        if edge.parent == Some(name) {
            accumulate(&mut family.children, edge.child, projected);
            family.children_count += call.count;
        }

        if edge.child == name {
            accumulate(&mut family.parents, edge.parent_name(), projected);
            family.parents_count += call.count;
        }
    }

    debug!(
        "Nearest family of '{}': {} children, {} parents",
        name,
        family.children.len(),
        family.parents.len()
    );

    family
}

/// Add `call` into `map[neighbor]`
///
/// **Private** - internal accumulation
fn accumulate(map: &mut PairCallMap, neighbor: &str, call: PairCall) {
    *map.calls.entry(neighbor.to_string()).or_default() += call;
}

impl PairCallMap {
    /// Direct family of `name`; see [`compute_nearest_family`]
    pub fn compute_nearest_family(&self, name: &str) -> NearestFamily {
        compute_nearest_family(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_of_root_has_empty_parent() {
        let map: PairCallMap = [
            ("main()", PairCall::new(1, 1000.0, 400.0, 1500.0)),
            ("main()==>foo", PairCall::new(2, 500.0, 200.0, 700.0)),
        ]
        .into_iter()
        .collect();

        let family = map.compute_nearest_family("main()");
        assert_eq!(family.parents.get(""), Some(&PairCall::new(1, 1000.0, 0.0, 0.0)));
        assert_eq!(family.children.get("foo"), Some(&PairCall::new(2, 500.0, 0.0, 0.0)));
        assert_eq!(family.parents_count, 1);
        assert_eq!(family.children_count, 2);
    }

    #[test]
    fn test_family_of_recursive_function() {
        let map: PairCallMap = [
            ("main()==>walk", PairCall::new(1, 90.0, 0.0, 0.0)),
            ("walk==>walk", PairCall::new(4, 60.0, 0.0, 0.0)),
        ]
        .into_iter()
        .collect();

        let family = map.compute_nearest_family("walk");
        assert_eq!(family.children.len(), 1);
        assert_eq!(family.parents.len(), 2);
        assert_eq!(family.children_count, 4);
        assert_eq!(family.parents_count, 5);
    }

    #[test]
    fn test_family_sums_edges_to_same_neighbor() {
        // Root edge and explicit empty caller both land on parent ""
        let map: PairCallMap = [
            ("foo", PairCall::new(1, 100.0, 40.0, 10.0)),
            ("==>foo", PairCall::new(2, 50.0, 20.0, 5.0)),
        ]
        .into_iter()
        .collect();

        let family = map.compute_nearest_family("foo");
        assert_eq!(family.parents.len(), 1);
        assert_eq!(family.parents.get(""), Some(&PairCall::new(3, 150.0, 0.0, 0.0)));
        assert_eq!(family.parents_count, 3);
    }

    #[test]
    fn test_family_of_unknown_function_is_empty() {
        let map: PairCallMap = [("main()", PairCall::new(1, 1.0, 1.0, 1.0))].into_iter().collect();
        assert_eq!(map.compute_nearest_family("ghost"), NearestFamily::default());
    }
}
