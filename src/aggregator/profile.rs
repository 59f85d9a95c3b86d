//! Lookups and filters over a flattened profile.

use super::ordering::MetricField;
use crate::parser::{Call, Profile};
use crate::utils::error::ProfileError;
use log::debug;

impl Profile {
    /// The call reached through the root edge
    ///
    /// **Public** - entry point for percentages and summaries
    ///
    /// # Errors
    /// * `ProfileError::MissingRoot` - no caller-less edge in the snapshot
    /// * `ProfileError::MultipleRoots` - more than one caller-less edge
    pub fn main(&self) -> Result<&Call, ProfileError> {
        match self.roots.as_slice() {
            [] => Err(ProfileError::MissingRoot),
            [root] => self.call(root),
            many => Err(ProfileError::MultipleRoots(many.to_vec())),
        }
    }

    /// Look up a call by function name
    pub fn get(&self, name: &str) -> Option<&Call> {
        self.calls.iter().find(|c| c.name == name)
    }

    /// Look up a call by function name, failing if absent
    pub fn call(&self, name: &str) -> Result<&Call, ProfileError> {
        self.get(name)
            .ok_or_else(|| ProfileError::UnknownFunction(name.to_string()))
    }

    /// First `n` calls in the current order
    pub fn top(&self, n: usize) -> &[Call] {
        &self.calls[..n.min(self.calls.len())]
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Keep calls whose `field` is at least `min_percent`% of the main call's value
    ///
    /// **Public** - threshold view; order and roots are preserved
    ///
    /// # Errors
    /// Same as [`Profile::main`].
    pub fn select_greater(&self, field: MetricField, min_percent: f64) -> Result<Profile, ProfileError> {
        let total = self.main()?.metric(field);
        let threshold = total * min_percent / 100.0;

        let calls: Vec<Call> = self
            .calls
            .iter()
            .filter(|c| c.metric(field) >= threshold)
            .cloned()
            .collect();

        debug!(
            "Kept {} of {} calls with {} >= {:.2}",
            calls.len(),
            self.calls.len(),
            field,
            threshold
        );

        Ok(Profile {
            calls,
            roots: self.roots.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{PairCall, PairCallMap};

    fn profile_with_roots(roots: &[&str]) -> Profile {
        let map: PairCallMap = roots
            .iter()
            .map(|r| (*r, PairCall::new(1, 10.0, 5.0, 0.0)))
            .collect();
        map.flatten()
    }

    #[test]
    fn test_main_missing_root() {
        let map: PairCallMap = [("a==>b", PairCall::new(1, 1.0, 1.0, 1.0))].into_iter().collect();
        assert_eq!(map.flatten().main(), Err(ProfileError::MissingRoot));
    }

    #[test]
    fn test_main_multiple_roots() {
        let profile = profile_with_roots(&["main()", "shutdown()"]);
        assert_eq!(
            profile.main(),
            Err(ProfileError::MultipleRoots(vec![
                "main()".to_string(),
                "shutdown()".to_string()
            ]))
        );
    }

    #[test]
    fn test_main_single_root() {
        let profile = profile_with_roots(&["main()"]);
        assert_eq!(profile.main().unwrap().name, "main()");
    }

    #[test]
    fn test_call_unknown() {
        let profile = profile_with_roots(&["main()"]);
        assert_eq!(
            profile.call("nope"),
            Err(ProfileError::UnknownFunction("nope".to_string()))
        );
    }

    #[test]
    fn test_top_clamps_to_len() {
        let profile = profile_with_roots(&["main()"]);
        assert_eq!(profile.top(5).len(), 1);
        assert_eq!(profile.top(0).len(), 0);
    }

    #[test]
    fn test_select_greater() {
        let map: PairCallMap = [
            ("main()", PairCall::new(1, 1000.0, 400.0, 0.0)),
            ("main()==>big", PairCall::new(1, 600.0, 0.0, 0.0)),
            ("main()==>tiny", PairCall::new(1, 5.0, 0.0, 0.0)),
        ]
        .into_iter()
        .collect();

        let selected = map.flatten().select_greater(MetricField::WallTime, 1.0).unwrap();
        let names: Vec<&str> = selected.calls.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["big", "main()"]);
    }
}
