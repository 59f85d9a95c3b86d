//! XHProf Callgraph
//!
//! Call-graph aggregation for function-level profiles. Given caller -> callee
//! edge costs (an XHProf snapshot), it can:
//!
//! - flatten edges into per-function inclusive/exclusive metrics
//! - average many snapshots into one representative snapshot
//! - subtract two snapshots to find regressions
//! - list the direct callers and callees of a function
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install xhprof-callgraph
//! xhprof-callgraph flatten run.json --sort ExclusiveWallTime
//! ```
//!
//! As a library:
//!
//! ```ignore
//! use xhprof_callgraph::parser::read_snapshot;
//!
//! let map = read_snapshot("run.json")?;
//! let mut profile = map.flatten();
//! profile.sort_by("WallTime")?;
//! println!("{}", profile.main()?.wall_time);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
