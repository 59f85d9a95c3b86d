//! Reducers combining several edge maps into one.
//!
//! Both reducers work over the UNION of input keys. An input that lacks a key
//! counts as a zero sample for that key.

use crate::parser::{PairCall, PairCallMap};
use crate::utils::config::MAX_REASONABLE_SNAPSHOTS;
use crate::utils::error::ProfileError;
use log::{debug, warn};
use std::collections::HashMap;

/// Average snapshots edge by edge
///
/// **Public** - reduce step for many independent runs
///
/// Each field is summed over all inputs and divided by the number of inputs,
/// not by the number of inputs containing the key. `count` uses integer
/// division (truncates toward zero).
///
/// # Errors
/// * `ProfileError::EmptyInput` - no snapshots given
///
/// # Example
/// ```ignore
/// let avg = average([&run1, &run2, &run3])?;
/// ```
pub fn average<'a, I>(maps: I) -> Result<PairCallMap, ProfileError>
where
    I: IntoIterator<Item = &'a PairCallMap>,
{
    let mut sums: HashMap<String, PairCall> = HashMap::new();
    let mut total: usize = 0;

    for map in maps {
        total += 1;
        for (key, call) in map {
            *sums.entry(key.clone()).or_default() += *call;
        }
    }

    if total == 0 {
        return Err(ProfileError::EmptyInput);
    }

    if total > MAX_REASONABLE_SNAPSHOTS {
        warn!("Averaging {} snapshots in a single pass", total);
    }

    debug!("Averaged {} snapshots into {} edges", total, sums.len());

    Ok(sums
        .into_iter()
        .map(|(key, sum)| (key, divide(sum, total)))
        .collect())
}

/// Edge-by-edge difference `left - right`
///
/// **Public** - delta between two snapshots
///
/// Negative values are the regression/improvement signal and are never clamped.
pub fn subtract(left: &PairCallMap, right: &PairCallMap) -> PairCallMap {
    let mut diff: PairCallMap = left
        .iter()
        .map(|(key, call)| {
            let other = right.get(key).copied().unwrap_or_default();
            (key.clone(), *call - other)
        })
        .collect();

    for (key, call) in right {
        if !left.contains_key(key) {
            diff.insert(key.clone(), -*call);
        }
    }

    debug!(
        "Subtracted {} edges from {} edges ({} in result)",
        right.len(),
        left.len(),
        diff.len()
    );

    diff
}

/// Divide a summed sample by the number of snapshots
///
/// **Private** - internal arithmetic
fn divide(sum: PairCall, n: usize) -> PairCall {
    PairCall {
        count: sum.count / n as i64,
        wall_time: sum.wall_time / n as f64,
        cpu_time: sum.cpu_time / n as f64,
        memory: sum.memory / n as f64,
    }
}

impl PairCallMap {
    /// `self - other`; see [`subtract`]
    pub fn subtract(&self, other: &PairCallMap) -> PairCallMap {
        subtract(self, other)
    }
}
