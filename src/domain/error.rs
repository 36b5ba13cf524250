//! Error types for campusnav.
//!
//! This module defines the load-time error [`LoadError`], the crate-wide error
//! [`NavigateError`] and a [`Result`] alias. All errors are implemented with the
//! `thiserror` crate.
//!
//! A load failure is fatal to the session: the caller switches the application
//! into its error phase and never renders building data. A details request for
//! a name that cannot be resolved is not an error at all; the event handler
//! simply produces no actions.

use thiserror::Error;

/// Failure while retrieving or decoding the building list.
///
/// Every variant carries a human-readable cause through its `Display`
/// implementation, which is what the error notice and the logs show.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request could not be sent or the response body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {reason}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Canonical reason phrase, empty if the code has none.
        reason: String,
    },

    /// The payload is not a JSON array of records.
    #[error("invalid payload: {0}")]
    Decode(String),

    /// A file-backed source could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The main error type for campusnav operations.
///
/// Wraps [`LoadError`] and the configuration, theme and output failures the
/// binary can run into.
///
/// # Examples
///
/// ```
/// use campusnav::NavigateError;
///
/// fn validate_endpoint(endpoint: &str) -> Result<(), NavigateError> {
///     if endpoint.is_empty() {
///         return Err(NavigateError::Config("endpoint must not be empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_endpoint("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum NavigateError {
    /// Building data could not be loaded.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The presentation surface could not carry out an action, such as
    /// opening a directions link.
    #[error("Surface error: {0}")]
    Surface(String),
}

/// A specialized `Result` type for campusnav operations.
pub type Result<T> = std::result::Result<T, NavigateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_like_http_status_line() {
        let err = LoadError::Status {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }

    #[test]
    fn load_error_converts_into_navigate_error() {
        let err: NavigateError = LoadError::Decode("expected an array".to_string()).into();
        assert!(matches!(err, NavigateError::Load(LoadError::Decode(_))));
        assert_eq!(err.to_string(), "Load error: invalid payload: expected an array");
    }
}
