//! Data model shared by the loader, the aggregation engine and the writers.
//!
//! A [`PairCallMap`] is one snapshot (or an aggregate of several): edge key -> cost.
//! A [`Profile`] is the per-function view derived from it by `flatten`.

use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::collections::HashMap;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Cost attributed to one caller -> callee edge
///
/// Field names follow XHProf raw output (`ct`, `wt`, `cpu`, `mu`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PairCall {
    /// Number of calls (negative only in a delta)
    #[serde(rename = "ct", default)]
    pub count: i64,

    /// Wall-clock time, microseconds by convention
    #[serde(rename = "wt", default)]
    pub wall_time: f64,

    /// CPU time, microseconds by convention
    #[serde(rename = "cpu", default)]
    pub cpu_time: f64,

    /// Memory delta, bytes by convention
    #[serde(rename = "mu", default)]
    pub memory: f64,
}

impl PairCall {
    /// Create a new edge cost
    pub fn new(count: i64, wall_time: f64, cpu_time: f64, memory: f64) -> Self {
        Self {
            count,
            wall_time,
            cpu_time,
            memory,
        }
    }

    /// Wall time and count only; the projection used by nearest-family views
    pub fn time_and_count(&self) -> Self {
        Self {
            count: self.count,
            wall_time: self.wall_time,
            ..Self::default()
        }
    }
}

impl Add for PairCall {
    type Output = PairCall;

    fn add(self, rhs: PairCall) -> PairCall {
        PairCall {
            count: self.count + rhs.count,
            wall_time: self.wall_time + rhs.wall_time,
            cpu_time: self.cpu_time + rhs.cpu_time,
            memory: self.memory + rhs.memory,
        }
    }
}

impl AddAssign for PairCall {
    fn add_assign(&mut self, rhs: PairCall) {
        *self = *self + rhs;
    }
}

impl Sub for PairCall {
    type Output = PairCall;

    fn sub(self, rhs: PairCall) -> PairCall {
        PairCall {
            count: self.count - rhs.count,
            wall_time: self.wall_time - rhs.wall_time,
            cpu_time: self.cpu_time - rhs.cpu_time,
            memory: self.memory - rhs.memory,
        }
    }
}

impl Neg for PairCall {
    type Output = PairCall;

    fn neg(self) -> PairCall {
        PairCall::default() - self
    }
}

/// Edge key -> edge cost for one snapshot
///
/// **Public** - the raw unit of work for every aggregation operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairCallMap {
    pub calls: HashMap<String, PairCall>,
}

impl PairCallMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, call: PairCall) -> Option<PairCall> {
        self.calls.insert(key.into(), call)
    }

    pub fn get(&self, key: &str) -> Option<&PairCall> {
        self.calls.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.calls.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, String, PairCall> {
        self.calls.keys()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, PairCall> {
        self.calls.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, PairCall)> for PairCallMap {
    fn from_iter<I: IntoIterator<Item = (K, PairCall)>>(iter: I) -> Self {
        Self {
            calls: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PairCallMap {
    type Item = (&'a String, &'a PairCall);
    type IntoIter = hash_map::Iter<'a, String, PairCall>;

    fn into_iter(self) -> Self::IntoIter {
        self.calls.iter()
    }
}

/// Per-function node of a flattened profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub name: String,
    pub count: i64,
    pub wall_time: f64,
    pub exclusive_wall_time: f64,
    pub cpu_time: f64,
    pub exclusive_cpu_time: f64,
    pub memory: f64,
    pub exclusive_memory: f64,
    /// Wall time not explained by CPU time; negative values are kept as-is
    pub io_time: f64,
    pub exclusive_io_time: f64,
}

/// Flattened per-function profile
///
/// `calls` has no meaningful order until `sort_by` is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub calls: Vec<Call>,

    /// Names reached through root (caller-less) edges, ascending
    pub roots: Vec<String>,
}

/// Direct callers and callees of one function
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NearestFamily {
    /// Callee name -> wall time and count
    pub children: PairCallMap,

    /// Caller name -> wall time and count (empty name for the root edge)
    pub parents: PairCallMap,

    pub children_count: i64,
    pub parents_count: i64,
}
