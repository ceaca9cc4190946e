//! The vehicles query and its HTTP request description.
//!
//! The plugin never talks to the network itself. It describes the request as a
//! [`QueryRequest`] and the plugin shim hands that to the host's web request
//! API. The reply comes back as an event carrying the same context map, which
//! is how it is matched to this request.

use crate::api::config::ClientConfig;
use crate::domain::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// GraphQL document requesting every vehicle of the glossary.
pub const VEHICLES_QUERY: &str = r#"query Vehicles($languageCode: String = "ru") {
  vehicles(lang: $languageCode) {
    title
    description
    icons {
      large
    }
    level
    type {
      name
      title
    }
    nation {
      name
      title
    }
  }
}"#;

/// Context key identifying replies that belong to this plugin's query.
pub const CONTEXT_KEY: &str = "fleetview_request";

/// Context value of the vehicles query.
pub const CONTEXT_VEHICLES: &str = "vehicles";

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
struct Variables<'a> {
    #[serde(rename = "languageCode")]
    language_code: &'a str,
}

/// A fully described HTTP POST, ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
    /// Correlation data echoed back by the host with the reply.
    pub context: BTreeMap<String, String>,
}

impl QueryRequest {
    /// Returns whether a reply context belongs to the vehicles query.
    #[must_use]
    pub fn is_vehicles_reply(context: &BTreeMap<String, String>) -> bool {
        context.get(CONTEXT_KEY).map(String::as_str) == Some(CONTEXT_VEHICLES)
    }
}

/// Builder for the single query this plugin issues.
#[derive(Debug, Clone, Copy, Default)]
pub struct VehiclesQuery;

impl VehiclesQuery {
    /// Describes the POST request for the configured endpoint and language.
    ///
    /// # Errors
    ///
    /// Returns an error if the request body cannot be serialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use fleetview::api::{ClientConfig, VehiclesQuery};
    ///
    /// let request = VehiclesQuery::request(&ClientConfig::default()).unwrap();
    /// assert_eq!(request.url, "https://vortex.korabli.su/api/graphql/glossary/");
    /// assert_eq!(request.headers["Content-Type"], "application/json");
    /// ```
    pub fn request(config: &ClientConfig) -> Result<QueryRequest> {
        let payload = GraphQlRequest {
            query: VEHICLES_QUERY,
            operation_name: "Vehicles",
            variables: Variables {
                language_code: config.language(),
            },
        };
        let body = serde_json::to_vec(&payload)?;

        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());

        let mut context = BTreeMap::new();
        context.insert(CONTEXT_KEY.to_string(), CONTEXT_VEHICLES.to_string());

        tracing::debug!(
            endpoint = %config.endpoint(),
            language = %config.language(),
            body_len = body.len(),
            "vehicles query prepared"
        );

        Ok(QueryRequest {
            url: config.endpoint().to_string(),
            headers,
            body,
            context,
        })
    }
}
