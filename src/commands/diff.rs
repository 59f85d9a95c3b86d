//! Diff command implementation.
//! Subtracts a baseline snapshot from a target snapshot and reports the delta.

use super::models::DiffArgs;
use crate::aggregator::subtract;
use crate::output::{render_delta, write_pair_call_map};
use crate::parser::{read_snapshot, PairCallMap};
use anyhow::{Context, Result};
use colored::*;

/// Execute the diff command
pub fn execute_diff(args: DiffArgs) -> Result<PairCallMap> {
    // Step 1: Load snapshots
    let baseline = read_snapshot(&args.baseline).context("Failed to read baseline snapshot")?;
    let target = read_snapshot(&args.target).context("Failed to read target snapshot")?;

    // Step 2: Delta, positive = target got more expensive
    let delta = subtract(&target, &baseline);

    // Step 3: Write output if requested
    if let Some(path) = &args.output {
        write_pair_call_map(&delta, path).context("Failed to write delta snapshot")?;
        println!(
            "📊 Delta snapshot written to {}",
            path.display().to_string().cyan()
        );
    }

    // Step 4: Terminal summary
    if args.summary {
        println!("{}", render_delta(&delta, args.top_calls));
    }

    Ok(delta)
}
