//! Edge key parsing.
//!
//! An edge key names one caller -> callee relationship: `"parent==>child"`.
//! A key without the separator is a root call (`"main()"`), i.e. a call with no caller.
//!
//! Keys are split on the FIRST separator only. `"a==>b==>c"` parses as
//! parent `a`, child `b==>c`; no multi-hop chain is inferred.

use crate::utils::config::EDGE_SEPARATOR;
use std::fmt;

/// A parsed edge key
///
/// **Public** - produced once per key and consumed by every aggregation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey<'a> {
    /// Caller name, `None` for a root call
    pub parent: Option<&'a str>,

    /// Callee name
    pub child: &'a str,
}

impl<'a> EdgeKey<'a> {
    /// Parse an edge key, splitting on the first separator
    ///
    /// **Public** - main entry point for key parsing
    pub fn parse(key: &'a str) -> Self {
        match key.split_once(EDGE_SEPARATOR) {
            Some((parent, child)) => Self {
                parent: Some(parent),
                child,
            },
            None => Self {
                parent: None,
                child: key,
            },
        }
    }

    /// True when the key has no caller
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Caller name, empty for a root call
    pub fn parent_name(&self) -> &'a str {
        self.parent.unwrap_or("")
    }

    /// True when the child part still contains the separator
    ///
    /// Such keys are legal but usually mean a function name contains `==>`
    /// or the key was built from a deeper stack.
    pub fn is_ambiguous(&self) -> bool {
        self.child.contains(EDGE_SEPARATOR)
    }
}

impl fmt::Display for EdgeKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pair_name(self.parent, self.child))
    }
}

/// Split an edge key into `(parent, child)`; parent is empty for a root call
///
/// **Public** - string-level convenience over [`EdgeKey::parse`]
pub fn parse_pair_name(key: &str) -> (&str, &str) {
    let edge = EdgeKey::parse(key);
    (edge.parent_name(), edge.child)
}

/// Build an edge key from its parts
pub fn pair_name(parent: Option<&str>, child: &str) -> String {
    match parent {
        Some(parent) => format!("{}{}{}", parent, EDGE_SEPARATOR, child),
        None => child.to_string(),
    }
}
