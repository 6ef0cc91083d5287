//! Error types for lexsense
//!
//! Every fallible operation in the library returns [`Result`], with
//! [`LexSenseError`] as the default error type.

use std::path::PathBuf;

/// Result alias used throughout the crate
pub type Result<T, E = LexSenseError> = std::result::Result<T, E>;

/// Errors raised while loading resources or running a job
#[derive(Debug, thiserror::Error)]
pub enum LexSenseError {
    /// A line of a lexical resource could not be parsed
    #[error("malformed resource at line {line}: {message}")]
    MalformedResource { line: usize, message: String },

    /// A lexical resource file could not be read
    #[error("failed to read resource '{}': {source}", path.display())]
    ResourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input document could not be read
    #[error("failed to read document '{}': {source}", path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document produced no text units
    #[error("document contains no text units")]
    EmptyDocument,

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A record of a research dataset could not be parsed
    #[error("malformed dataset at line {line}: {message}")]
    MalformedDataset { line: usize, message: String },

    /// A dataset had no records to compute over
    #[error("dataset is empty: {0}")]
    EmptyDataset(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LexSenseError {
    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create a malformed resource error for a 1-based line number
    pub fn malformed_resource(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedResource {
            line,
            message: message.into(),
        }
    }

    /// Create a malformed dataset error for a 1-based line number
    pub fn malformed_dataset(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedDataset {
            line,
            message: message.into(),
        }
    }

    pub fn empty_dataset(what: impl Into<String>) -> Self {
        Self::EmptyDataset(what.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_location() {
        let err = LexSenseError::malformed_resource(3, "expected at least 2 fields");
        assert_eq!(
            err.to_string(),
            "malformed resource at line 3: expected at least 2 fields"
        );

        let err = LexSenseError::DocumentRead {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_invalid_config_helper() {
        let err = LexSenseError::invalid_config("percentage must be in (0, 1]");
        assert!(matches!(err, LexSenseError::InvalidConfig(_)));
    }
}
