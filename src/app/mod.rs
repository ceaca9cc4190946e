//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (`main.rs`) and the api/catalog/ui layers:
//!
//! ```text
//! Host Event → Event → handle_event → AppState mutations → Actions → Host calls
//!                            ↑                                 │
//!                            └──── QueryCompleted (reply) ─────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::AppState;
