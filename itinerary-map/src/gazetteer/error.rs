//! Gazetteer loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading a gazetteer file.
#[derive(Debug, thiserror::Error)]
pub enum GazetteerError {
    /// File could not be read
    #[error("failed to read gazetteer file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not a JSON array of station records
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A record's value is not a `lat,lon` pair
    #[error("invalid entry {label:?}: {reason}")]
    InvalidEntry { label: String, reason: &'static str },
}
