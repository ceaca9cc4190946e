//! Error types for the fleetview plugin.
//!
//! [`FleetviewError`] is the single error type used across the crate, with a
//! [`Result`] alias for convenience. The fetch layer folds every failure into
//! a user-facing message, so the variants here exist mainly to keep the
//! internal plumbing typed and to produce readable `Display` output.

use thiserror::Error;

/// The main error type for fleetview operations.
///
/// # Examples
///
/// ```
/// use fleetview::FleetviewError;
///
/// let err = FleetviewError::Fetch("Response not successful: Received status code 502".into());
/// assert_eq!(err.to_string(), "Response not successful: Received status code 502");
/// ```
#[derive(Debug, Error)]
pub enum FleetviewError {
    /// The remote query could not be completed.
    ///
    /// Covers transport failures, non-success HTTP statuses and GraphQL
    /// `errors` payloads alike. The message is shown to the user verbatim.
    #[error("{0}")]
    Fetch(String),

    /// The response body was not the JSON shape the query asks for.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for fleetview operations.
pub type Result<T> = std::result::Result<T, FleetviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_displays_message_verbatim() {
        let err = FleetviewError::Fetch("boom".to_string());
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn decode_error_converts_from_serde_json() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: FleetviewError = source.into();
        assert!(matches!(err, FleetviewError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to decode response:"));
    }
}
