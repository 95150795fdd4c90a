//! Error types for the object list crate.
//!
//! The list controller itself never fails: lookups return `Option`, gestures
//! on an invalid selection are no-ops. [`ObjectListError`] covers the ambient
//! layers around it (configuration files, catalog loading, log output). All
//! variants are implemented with `thiserror`.

use thiserror::Error;

/// The main error type for objlist operations.
///
/// # Examples
///
/// ```
/// use objlist::ObjectListError;
///
/// fn validate_level(level: &str) -> Result<(), ObjectListError> {
///     Err(ObjectListError::Config(format!("unknown trace level: {level}")))
/// }
///
/// assert!(validate_level("loud").is_err());
/// ```
#[derive(Debug, Error)]
pub enum ObjectListError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalog file was readable but describes an invalid object list.
    ///
    /// For example an unsupported format version.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// JSON catalog could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A specialized `Result` type for objlist operations.
pub type Result<T> = std::result::Result<T, ObjectListError>;
