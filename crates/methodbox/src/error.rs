//! Error types for catalog loading

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for catalog operations.
///
/// Both variants are fatal at startup: the browser is never rendered over
/// a partial or empty catalog. The data source is static and local, so
/// neither condition is retried.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The data source could not be read
    #[error("method data not found at `{path}`")]
    Missing {
        /// Path that was attempted
        path: PathBuf,

        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The data source was read but is not the expected structure
    #[error("method data at `{path}` is malformed")]
    Malformed {
        /// Path that was read
        path: PathBuf,

        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
