//! Error types for the corn delivery tracker

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Errors raised while reading business snapshots
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Snapshot file not found: {0}")]
    NotFound(String),

    #[error("Snapshot is malformed: {0}")]
    Malformed(String),
}

/// Report export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("CSV export error: {0}")]
    Csv(String),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Report failed: {0}")]
    ReportFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_error_display() {
        let err: Error = ExportError::UnsupportedFormat("pdf".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Export error: Unsupported export format: pdf"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
