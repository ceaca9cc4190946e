//! Client configuration for the glossary endpoint.

use crate::domain::error::{FleetviewError, Result};

/// Default GraphQL endpoint of the vehicle glossary.
pub const DEFAULT_ENDPOINT: &str = "https://vortex.korabli.su/api/graphql/glossary/";

/// Default value of the `languageCode` query variable.
pub const DEFAULT_LANGUAGE: &str = "ru";

/// Connection settings handed to the fetch layer at startup.
///
/// Built once from the plugin configuration and then owned by the application
/// state; there is no process-wide client.
///
/// # Examples
///
/// ```
/// use fleetview::api::ClientConfig;
///
/// let config = ClientConfig::new("https://example.org/graphql", "en").unwrap();
/// assert_eq!(config.language(), "en");
///
/// assert!(ClientConfig::new("", "en").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: String,
    language: String,
}

impl ClientConfig {
    /// Creates a configuration for the given endpoint and language code.
    ///
    /// # Errors
    ///
    /// Returns [`FleetviewError::Config`] if the endpoint is not an `http(s)`
    /// URL or the language code is blank.
    pub fn new(endpoint: impl Into<String>, language: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into().trim().to_string();
        let language = language.into().trim().to_string();

        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(FleetviewError::Config(format!(
                "endpoint must be an http(s) URL, got {endpoint:?}"
            )));
        }
        if language.is_empty() {
            return Err(FleetviewError::Config("language code must not be empty".to_string()));
        }

        Ok(Self { endpoint, language })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_glossary() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.language(), "ru");
    }

    #[test]
    fn trims_inputs() {
        let config = ClientConfig::new("  https://example.org/graphql ", " en ").unwrap();
        assert_eq!(config.endpoint(), "https://example.org/graphql");
        assert_eq!(config.language(), "en");
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let err = ClientConfig::new("ftp://example.org", "en").unwrap_err();
        assert!(matches!(err, FleetviewError::Config(_)));
    }

    #[test]
    fn rejects_blank_language() {
        assert!(ClientConfig::new(DEFAULT_ENDPOINT, "  ").is_err());
    }
}
