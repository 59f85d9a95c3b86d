//! Average command implementation.
//! Reduces many snapshots into one representative snapshot.

use super::flatten::read_snapshots;
use super::models::AverageArgs;
use crate::aggregator::average;
use crate::output::{pair_call_map_to_string, write_pair_call_map};
use crate::parser::PairCallMap;
use anyhow::{Context, Result};
use colored::*;
use log::info;

/// Execute the average command
pub fn execute_average(args: AverageArgs) -> Result<PairCallMap> {
    // Step 1: Load snapshots
    let snapshots = read_snapshots(&args.snapshots)?;

    // Step 2: Average
    let averaged = average(&snapshots).context("Failed to average snapshots")?;
    info!(
        "Averaged {} snapshots into {} edges",
        snapshots.len(),
        averaged.len()
    );

    // Step 3: Write output if requested
    if let Some(path) = &args.output {
        write_pair_call_map(&averaged, path).context("Failed to write averaged snapshot")?;
        println!(
            "📊 Averaged snapshot written to {}",
            path.display().to_string().cyan()
        );
    } else {
        println!("{}", pair_call_map_to_string(&averaged)?);
    }

    Ok(averaged)
}
