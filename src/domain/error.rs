//! Error types for the blognest plugin.
//!
//! This module defines the centralized error type [`BlognestError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. Store operations
//! never produce errors; these variants cover the ambient concerns around them
//! (seed loading, themes, worker messaging).

use thiserror::Error;

/// The main error type for blognest plugin operations.
///
/// # Examples
///
/// ```
/// use blognest::domain::BlognestError;
///
/// fn read_seed() -> Result<(), BlognestError> {
///     Err(BlognestError::Storage("duplicate blog id 3".to_string()))
/// }
///
/// assert!(read_seed().is_err());
/// ```
#[derive(Debug, Error)]
pub enum BlognestError {
    /// Loading or validating the seed blog collection failed.
    ///
    /// The string describes the offending file or record.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when the worker receives a request it cannot decode.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for blognest operations.
pub type Result<T> = std::result::Result<T, BlognestError>;
