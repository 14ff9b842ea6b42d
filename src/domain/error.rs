//! Error types for the Zatlas plugin.
//!
//! This module defines the centralized error type [`AtlasError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! A country-detail lookup that matches nothing is deliberately NOT an error:
//! "not found" is a screen phase with its own rendering, while [`AtlasError`]
//! covers transport, decoding, and configuration failures.

use thiserror::Error;

/// The main error type for Zatlas plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin
/// execution, from upstream fetch failures to theme loading and configuration
/// issues. Variants that wrap underlying errors use `#[from]` for automatic
/// conversion.
///
/// # Examples
///
/// ```
/// use zatlas::domain::AtlasError;
///
/// fn classify(status: u16) -> Result<(), AtlasError> {
///     Err(AtlasError::Fetch(format!("HTTP status {status}")))
/// }
/// ```
#[derive(Debug, Error)]
pub enum AtlasError {
    /// The upstream HTTP request failed.
    ///
    /// Covers transport errors and non-success status codes from the country
    /// data source. The string is surfaced verbatim in the error screen.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// An API payload could not be decoded.
    ///
    /// Occurs when a response body is not valid UTF-8 or does not match the
    /// expected JSON shape.
    #[error("payload decode failed: {0}")]
    Decode(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (trace log writing,
    /// theme file reads). Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when the plugin cannot serialize a message for, or interpret a
    /// response from, its decode worker thread.
    #[error("worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Zatlas operations.
///
/// This is a type alias for `std::result::Result<T, AtlasError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, AtlasError>;

impl From<serde_json::Error> for AtlasError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
