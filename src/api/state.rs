//! Tri-state result of the vehicles query.

use crate::api::response::GraphQlResponse;
use crate::domain::error::{FleetviewError, Result};
use crate::domain::Vehicle;

/// Outcome of the single catalog fetch.
///
/// The view matches on this exhaustively: `Loading` shows an indicator,
/// `Error` shows the message alone, and only `Success` runs the filtering and
/// grid logic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    /// The fetch failed; the message is displayed verbatim.
    Error(String),
    /// The records in the order the endpoint returned them.
    Success(Vec<Vehicle>),
}

impl FetchState {
    /// Builds the state from a completed HTTP exchange.
    ///
    /// Any failure (non-success status, undecodable body, GraphQL `errors`)
    /// collapses into [`FetchState::Error`] carrying the failure's message.
    ///
    /// # Examples
    ///
    /// ```
    /// use fleetview::api::FetchState;
    ///
    /// let state = FetchState::from_response(500, b"");
    /// assert_eq!(
    ///     state,
    ///     FetchState::Error("Response not successful: Received status code 500".to_string())
    /// );
    ///
    /// let state = FetchState::from_response(200, br#"{"data":{"vehicles":[]}}"#);
    /// assert_eq!(state, FetchState::Success(vec![]));
    /// ```
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let _span = tracing::debug_span!("decode_response", status, body_len = body.len()).entered();

        match decode(status, body) {
            Ok(vehicles) => {
                tracing::debug!(vehicle_count = vehicles.len(), "vehicles decoded");
                Self::Success(vehicles)
            }
            Err(e) => {
                tracing::warn!(error = %e, "vehicles query failed");
                Self::Error(e.to_string())
            }
        }
    }

    /// Builds the error state for a request that never produced a response.
    #[must_use]
    pub fn from_transport_error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the fetched records, or an empty slice unless the fetch succeeded.
    #[must_use]
    pub fn vehicles(&self) -> &[Vehicle] {
        match self {
            Self::Success(vehicles) => vehicles,
            Self::Loading | Self::Error(_) => &[],
        }
    }
}

fn decode(status: u16, body: &[u8]) -> Result<Vec<Vehicle>> {
    if !(200..=299).contains(&status) {
        return Err(FleetviewError::Fetch(format!(
            "Response not successful: Received status code {status}"
        )));
    }

    let response: GraphQlResponse = serde_json::from_slice(body)?;

    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let message = errors
            .into_iter()
            .map(|error| error.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(FleetviewError::Fetch(message));
    }

    let vehicles = response
        .data
        .and_then(|data| data.vehicles)
        .ok_or_else(|| FleetviewError::Fetch("Response contained no vehicles".to_string()))?;

    Ok(vehicles.into_iter().map(Vehicle::from).collect())
}
