//! Domain layer for the fleetview plugin.
//!
//! Core types independent of Zellij APIs and of the wire format:
//!
//! - [`error`]: Error types and result aliases
//! - [`vehicle`]: The vehicle record and its categorical dimensions

pub mod error;
pub mod vehicle;

pub use error::{FleetviewError, Result};
pub use vehicle::{Category, Vehicle};
