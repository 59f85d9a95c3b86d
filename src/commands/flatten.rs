//! Flatten command implementation.
//!
//! The flatten command:
//! 1. Reads one or more snapshots
//! 2. Averages them when more than one is given
//! 3. Flattens into a per-function profile
//! 4. Sorts and optionally filters it
//! 5. Prints a summary and writes the report

use super::models::FlattenArgs;
use crate::aggregator::{average, MetricField};
use crate::output::{render_profile, write_report, Report};
use crate::parser::{read_snapshot, PairCallMap, Profile};
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the flatten command
///
/// **Public** - main entry point called from main.rs
pub fn execute_flatten(args: FlattenArgs) -> Result<Profile> {
    let start_time = Instant::now();

    let sort_field: MetricField = args
        .sort_field
        .parse()
        .context("Invalid --sort field")?;

    // Step 1: Load snapshots
    info!("Step 1/3: Reading {} snapshot(s)...", args.snapshots.len());
    let snapshots = read_snapshots(&args.snapshots)?;

    // Step 2: Reduce to a single edge map
    let map = if snapshots.len() == 1 {
        snapshots.into_iter().next().unwrap_or_default()
    } else {
        info!("Averaging {} snapshots...", snapshots.len());
        average(&snapshots).context("Failed to average snapshots")?
    };

    // Step 3: Flatten, sort, filter
    info!("Step 2/3: Flattening {} edges...", map.len());
    let mut profile = map.flatten();
    profile.sort_by_field(sort_field);

    if let Some(min_percent) = args.min_percent {
        profile = profile
            .select_greater(sort_field, min_percent)
            .context("Cannot filter by percentage without a single root call")?;
    }

    debug!("Profile has {} calls", profile.len());

    // Step 4: Output
    info!("Step 3/3: Writing output...");
    if args.summary {
        println!("{}", render_profile(&profile, sort_field, args.top_calls));
    }

    if let Some(path) = &args.output {
        let report = Report::new(&profile, args.snapshots.len());
        write_report(&report, path).context("Failed to write profile report")?;
    }

    info!("Flatten completed in {:.2?}", start_time.elapsed());

    Ok(profile)
}

/// Read every snapshot path, failing on the first bad file
///
/// **Public** - shared by the commands that accept several snapshots
pub fn read_snapshots(paths: &[std::path::PathBuf]) -> Result<Vec<PairCallMap>> {
    if paths.is_empty() {
        bail!("At least one snapshot file is required");
    }

    paths
        .iter()
        .map(|path| {
            read_snapshot(path)
                .with_context(|| format!("Failed to read snapshot {}", path.display()))
        })
        .collect()
}
