//! Data fetch layer for the vehicle glossary.
//!
//! Describes the one GraphQL request the plugin makes and decodes its reply
//! into a [`FetchState`]. The transport itself belongs to the host: the plugin
//! shim passes the [`QueryRequest`] to Zellij's web request API and feeds the
//! status and body it gets back into [`FetchState::from_response`].
//!
//! ```text
//! ClientConfig → VehiclesQuery::request → QueryRequest → (host transport)
//!                                                            │
//!                           FetchState ← from_response ←─────┘
//! ```
//!
//! # Modules
//!
//! - [`config`]: Endpoint and language settings
//! - [`query`]: GraphQL document and request description
//! - [`response`]: Wire types and mapping into the domain
//! - [`state`]: The `Loading | Error | Success` result type

pub mod config;
pub mod query;
pub mod response;
pub mod state;

pub use config::ClientConfig;
pub use query::{QueryRequest, VehiclesQuery};
pub use state::FetchState;
