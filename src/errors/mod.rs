use std::path::Path;
use thiserror::Error;

/// Why a single participant record was left out of a tournament's results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("participant record {record_id:?} has no name, username or user id")]
    MissingIdentity { record_id: Option<i64> },
    #[error("participant record #{index} could not be parsed: {reason}")]
    Unparseable { index: usize, reason: String },
}

/// Add context to tournament file errors
pub fn load_context(operation: &str, path: &Path) -> String {
    format!("Failed to {} tournament data: {}", operation, path.display())
}

/// Add context to configuration errors
pub fn config_context(operation: &str, path: &Path) -> String {
    format!("Failed to {} configuration file: {}", operation, path.display())
}
