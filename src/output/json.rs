//! JSON output writer.
//!
//! Results are wrapped in a small versioned envelope. Edge maps are written
//! bare, in XHProf field names, so an averaged or subtracted map can be fed
//! back into any command as a snapshot.

use crate::parser::{PairCall, PairCallMap};
use crate::utils::config::REPORT_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Versioned wrapper around any command result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report<T> {
    /// Report format version
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// Number of snapshots the data was computed from
    pub source_count: usize,

    /// Command result
    pub data: T,
}

impl<T> Report<T> {
    /// Wrap `data` computed from `source_count` snapshots
    pub fn new(data: T, source_count: usize) -> Self {
        Self {
            version: REPORT_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            source_count,
            data,
        }
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report<T: Serialize>(
    report: &Report<T>,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    write_json(report, output_path.as_ref())
}

/// Read a report from a JSON file
pub fn read_report<T: DeserializeOwned>(input_path: impl AsRef<Path>) -> Result<Report<T>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;

    let report: Report<T> =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} sources",
        report.version, report.source_count
    );

    Ok(report)
}

/// Write an edge map as a bare snapshot, keys in ascending order
pub fn write_pair_call_map(map: &PairCallMap, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    write_json(&ordered_edges(map), output_path.as_ref())
}

/// Pretty JSON for an edge map, keys in ascending order
///
/// **Public** - same layout as `write_pair_call_map`, for stdout
pub fn pair_call_map_to_string(map: &PairCallMap) -> Result<String, OutputError> {
    serde_json::to_string_pretty(&ordered_edges(map)).map_err(OutputError::SerializationFailed)
}

fn ordered_edges(map: &PairCallMap) -> BTreeMap<&String, &PairCall> {
    map.iter().collect()
}

/// Serialize any value to a pretty JSON file
///
/// **Private** - shared by the writers above
fn write_json<T: Serialize + ?Sized>(value: &T, output_path: &Path) -> Result<(), OutputError> {
    info!("Writing JSON to: {}", output_path.display());

    // Validate path
    super::validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, value).map_err(OutputError::SerializationFailed)?;

    info!(
        "JSON written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
