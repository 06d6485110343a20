//! Error types for the apifinder library.
//!
//! All errors are represented by the [`ApiFinderError`] enum. The ranking core
//! itself never fails; errors come from catalog ingestion, configuration files
//! and the command line front end.
//!
//! # Examples
//!
//! ```
//! use apifinder::error::{ApiFinderError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ApiFinderError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for apifinder operations.
#[derive(Error, Debug)]
pub enum ApiFinderError {
    /// I/O errors (file operations, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV decoding errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog could not be acquired or decoded
    #[error("Catalog unavailable: {0}")]
    Catalog(String),

    /// Configuration errors (taxonomy files, weights, limits)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with ApiFinderError.
pub type Result<T> = std::result::Result<T, ApiFinderError>;

impl ApiFinderError {
    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        ApiFinderError::Catalog(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ApiFinderError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ApiFinderError::InvalidArgument(msg.into())
    }

    /// Whether this error means the catalog could not be loaded.
    ///
    /// I/O, CSV and JSON failures only happen while reading a catalog or a
    /// taxonomy file, so the front end reports all of them as an unavailable
    /// catalog when they occur during ingestion.
    pub fn is_catalog_unavailable(&self) -> bool {
        matches!(
            self,
            ApiFinderError::Catalog(_)
                | ApiFinderError::Io(_)
                | ApiFinderError::Csv(_)
                | ApiFinderError::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ApiFinderError::catalog("missing file");
        assert_eq!(error.to_string(), "Catalog unavailable: missing file");

        let error = ApiFinderError::config("bad taxonomy");
        assert_eq!(error.to_string(), "Configuration error: bad taxonomy");

        let error = ApiFinderError::invalid_argument("limit");
        assert_eq!(error.to_string(), "Invalid argument: limit");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = ApiFinderError::from(io_error);

        match error {
            ApiFinderError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_catalog_unavailable_classification() {
        assert!(ApiFinderError::catalog("x").is_catalog_unavailable());
        assert!(
            ApiFinderError::from(io::Error::new(io::ErrorKind::NotFound, "gone"))
                .is_catalog_unavailable()
        );
        assert!(!ApiFinderError::config("x").is_catalog_unavailable());
        assert!(!ApiFinderError::invalid_argument("x").is_catalog_unavailable());
    }
}
