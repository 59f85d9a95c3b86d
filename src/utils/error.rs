//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised by the aggregation engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Invalid metric field: {0}")]
    InvalidField(String),

    #[error("Cannot average an empty list of snapshots")]
    EmptyInput,

    #[error("Profile has no root call")]
    MissingRoot,

    #[error("Profile has multiple root calls: {}", .0.join(", "))]
    MultipleRoots(Vec<String>),

    #[error("Function not found in profile: {0}")]
    UnknownFunction(String),
}

/// Errors that can occur while loading a raw snapshot
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid snapshot format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
