//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never touches the host. It returns a list of [`Action`]s
//! and the plugin shim in `main.rs` performs them with the Zellij API.

use crate::api::QueryRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Sends the catalog query through the host's web request API.
    ///
    /// Emitted at most once per plugin load.
    SendQuery(QueryRequest),
}
