//! XHProf Callgraph CLI
//!
//! Flattens, averages and compares XHProf-style call-graph snapshots.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use xhprof_callgraph::commands::{
    display_fields, display_version, execute_average, execute_diff, execute_family,
    execute_flatten, AverageArgs, DiffArgs, FamilyArgs, FlattenArgs,
};
use xhprof_callgraph::utils::config::{DEFAULT_SORT_FIELD, DEFAULT_TOP_CALLS};

/// XHProf Callgraph - aggregation for function-level profiles
#[derive(Parser, Debug)]
#[command(name = "xhprof-callgraph")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Flatten snapshots into a per-function profile
    Flatten {
        /// Snapshot JSON files (several are averaged first)
        #[arg(required = true)]
        snapshots: Vec<PathBuf>,

        /// Metric to sort by
        #[arg(short, long, env = "XHPROF_SORT", default_value = DEFAULT_SORT_FIELD)]
        sort: String,

        /// Number of functions to print
        #[arg(short, long, env = "XHPROF_TOP", default_value_t = DEFAULT_TOP_CALLS)]
        top: usize,

        /// Hide functions below this percentage of main() on the sort metric
        #[arg(long)]
        min_percent: Option<f64>,

        /// Output path for the profile report JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not print the text summary
        #[arg(long)]
        quiet: bool,
    },

    /// Average snapshots into one snapshot
    Average {
        /// Snapshot JSON files
        #[arg(required = true)]
        snapshots: Vec<PathBuf>,

        /// Output path for the averaged snapshot (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare two snapshots (target - baseline)
    Diff {
        /// Baseline snapshot JSON
        baseline: PathBuf,

        /// Target snapshot JSON
        target: PathBuf,

        /// Number of changed edges to print
        #[arg(short, long, env = "XHPROF_TOP", default_value_t = DEFAULT_TOP_CALLS)]
        top: usize,

        /// Output path for the delta snapshot
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not print the text summary
        #[arg(long)]
        quiet: bool,
    },

    /// Show direct callers and callees of a function
    Family {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Function name, e.g. "main()"
        #[arg(short, long)]
        function: String,

        /// Output path for the family report JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not print the text summary
        #[arg(long)]
        quiet: bool,
    },

    /// List sortable metric fields
    Fields,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Flatten {
            snapshots,
            sort,
            top,
            min_percent,
            output,
            quiet,
        } => {
            execute_flatten(FlattenArgs {
                snapshots,
                sort_field: sort,
                top_calls: top,
                min_percent,
                summary: !quiet,
                output,
            })?;
        }

        Commands::Average { snapshots, output } => {
            execute_average(AverageArgs { snapshots, output })?;
        }

        Commands::Diff {
            baseline,
            target,
            top,
            output,
            quiet,
        } => {
            execute_diff(DiffArgs {
                baseline,
                target,
                top_calls: top,
                summary: !quiet,
                output,
            })?;
        }

        Commands::Family {
            snapshot,
            function,
            output,
            quiet,
        } => {
            execute_family(FamilyArgs {
                snapshot,
                function,
                summary: !quiet,
                output,
            })?;
        }

        Commands::Fields => {
            display_fields();
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
