//! Error type shared by input loading, document construction, config and export.
//!
//! Rendering itself never fails: every optional field has a fallback string,
//! so only the edges of the pipeline return `ReportError`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The input text was not valid JSON.
    #[error("Failed to parse what-if JSON: {0}")]
    Parse(String),

    /// Valid JSON, but not shaped like a what-if result (e.g. `changes` is not an array).
    #[error("Malformed what-if document: {0}")]
    MalformedInput(String),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to serialize report blocks: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ReportError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_prefix() {
        let err = ReportError::Parse("expected value at line 1 column 1".to_string());
        assert_eq!(err.to_string(), "Failed to parse what-if JSON: expected value at line 1 column 1");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = ReportError::io("/tmp/missing.json", std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.json"));
        assert!(msg.contains("gone"));
    }
}
