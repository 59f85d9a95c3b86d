//! Family command implementation.
//! Lists the direct callers and callees of one function.

use super::models::FamilyArgs;
use crate::aggregator::compute_nearest_family;
use crate::output::{render_family, write_report, Report};
use crate::parser::{read_snapshot, NearestFamily};
use anyhow::{Context, Result};
use log::warn;

/// Execute the family command
pub fn execute_family(args: FamilyArgs) -> Result<NearestFamily> {
    let map = read_snapshot(&args.snapshot).context("Failed to read snapshot")?;

    let family = compute_nearest_family(&map, &args.function);

    if family.parents.is_empty() && family.children.is_empty() {
        warn!("Function '{}' has no edges in this snapshot", args.function);
    }

    if args.summary {
        println!("{}", render_family(&args.function, &family));
    }

    if let Some(path) = &args.output {
        let report = Report::new(&family, 1);
        write_report(&report, path).context("Failed to write family report")?;
    }

    Ok(family)
}
