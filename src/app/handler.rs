//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. The plugin shim translates host events into [`Event`]s
//! 2. [`handle_event`] pattern-matches the event
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for the shim to execute
//!
//! # Event Types
//!
//! - **Lifecycle**: `PermissionsGranted`, `PermissionsDenied`, `QueryCompleted`,
//!   `Resize`
//! - **Filters**: `FocusNextFilter`, `FocusPreviousFilter`, `NextOption`,
//!   `PreviousOption`, `ResetFilter`, `ResetAllFilters`
//! - **Scrolling**: `ScrollDown`, `ScrollUp`, `PageDown`, `PageUp`,
//!   `ScrollToTop`, `ScrollToBottom`
//!
//! # Example
//!
//! ```rust
//! use fleetview::app::{handle_event, Action, AppState, Event};
//! use fleetview::api::ClientConfig;
//! use fleetview::catalog::GridGeometry;
//! use fleetview::ui::Theme;
//!
//! let mut state = AppState::new(
//!     ClientConfig::default(),
//!     "World of Warships".to_string(),
//!     GridGeometry::default(),
//!     Theme::default(),
//! );
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(matches!(actions.as_slice(), [Action::SendQuery(_)]));
//! # Ok::<(), fleetview::FleetviewError>(())
//! ```

use crate::api::{FetchState, QueryRequest, VehiclesQuery};
use crate::app::{Action, AppState};
use crate::catalog::{FilterState, Step};
use crate::domain::Result;
use std::collections::BTreeMap;

/// Events triggered by user input or the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user granted web access; the catalog request may be sent.
    PermissionsGranted,
    /// The user refused web access.
    PermissionsDenied,

    /// The host delivered a web request result.
    QueryCompleted {
        status: u16,
        body: Vec<u8>,
        /// Correlation context echoed back by the host.
        context: BTreeMap<String, String>,
    },

    /// The pane was resized.
    Resize { rows: usize, cols: usize },

    FocusNextFilter,
    FocusPreviousFilter,
    /// Selects the next entry of the focused dropdown.
    NextOption,
    /// Selects the previous entry of the focused dropdown.
    PreviousOption,
    /// Sets the focused dropdown back to "All".
    ResetFilter,
    ResetAllFilters,

    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    ScrollToTop,
    ScrollToBottom,

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the pane should re-render.
///
/// # Errors
///
/// Returns an error if the catalog request cannot be built. Transport and
/// decode failures are not errors here: they become [`FetchState::Error`].
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::PermissionsGranted => {
            if state.request_sent {
                tracing::debug!("catalog request already sent, ignoring grant");
                return Ok((false, vec![]));
            }
            let request = VehiclesQuery::request(&state.client)?;
            tracing::info!(endpoint = %request.url, language = %state.client.language(), "sending catalog request");
            state.request_sent = true;
            Ok((false, vec![Action::SendQuery(request)]))
        }
        Event::PermissionsDenied => {
            tracing::warn!("web access denied, catalog cannot be fetched");
            if !state.fetch.is_loading() {
                return Ok((false, vec![]));
            }
            state.load_fetch_state(FetchState::from_transport_error(
                "Web access permission was denied",
            ));
            Ok((true, vec![]))
        }
        Event::QueryCompleted { status, body, context } => {
            if !QueryRequest::is_vehicles_reply(context) {
                tracing::debug!(context = ?context, "ignoring unrelated web request result");
                return Ok((false, vec![]));
            }
            if !state.fetch.is_loading() {
                tracing::debug!("catalog already loaded, ignoring duplicate reply");
                return Ok((false, vec![]));
            }
            tracing::debug!(status, body_len = body.len(), "catalog reply received");
            state.load_fetch_state(FetchState::from_response(*status, body));
            Ok((true, vec![]))
        }
        Event::Resize { rows, cols } => {
            let changed = state.viewport != (*rows, *cols);
            state.resize(*rows, *cols);
            Ok((changed, vec![]))
        }
        Event::FocusNextFilter => {
            state.focus = state.focus.next();
            Ok((true, vec![]))
        }
        Event::FocusPreviousFilter => {
            state.focus = state.focus.previous();
            Ok((true, vec![]))
        }
        Event::NextOption | Event::PreviousOption => {
            if !matches!(state.fetch, FetchState::Success(_)) {
                return Ok((false, vec![]));
            }
            let step = if *event == Event::NextOption { Step::Forward } else { Step::Backward };
            let before = state.filters.clone();
            state.filters.step(state.focus, &state.options, step);
            if state.filters == before {
                return Ok((false, vec![]));
            }
            tracing::debug!(dimension = ?state.focus, filters = ?state.filters, "filter option changed");
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ResetFilter => {
            let before = state.filters.clone();
            state.filters.reset(state.focus);
            if state.filters == before {
                return Ok((false, vec![]));
            }
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ResetAllFilters => {
            if state.filters.is_empty() {
                return Ok((false, vec![]));
            }
            state.filters = FilterState::default();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ScrollDown => Ok((state.scroll_by(1), vec![])),
        Event::ScrollUp => Ok((state.scroll_by(-1), vec![])),
        Event::PageDown => {
            let page = isize::try_from(state.page_rows()).unwrap_or(isize::MAX);
            Ok((state.scroll_by(page), vec![]))
        }
        Event::PageUp => {
            let page = isize::try_from(state.page_rows()).unwrap_or(isize::MAX);
            Ok((state.scroll_by(-page), vec![]))
        }
        Event::ScrollToTop => Ok((state.scroll_to(0), vec![])),
        Event::ScrollToBottom => Ok((state.scroll_to(usize::MAX), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Formats an event for span fields without dumping response bodies.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::QueryCompleted { status, body, .. } => {
                write!(f, "QueryCompleted({status}, {} bytes)", body.len())
            }
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::query::{CONTEXT_KEY, CONTEXT_VEHICLES};
    use crate::api::ClientConfig;
    use crate::catalog::{FilterDimension, GridGeometry};
    use crate::ui::Theme;

    const BODY: &str = r#"{"data":{"vehicles":[
        {"title":"Gremyashchy","description":"Destroyer","icons":{"large":"g.png"},"level":5,
         "type":{"name":"Destroyer","title":"Destroyer"},"nation":{"name":"ussr","title":"USSR"}},
        {"title":"Atago","description":"Cruiser","icons":{"large":"a.png"},"level":8,
         "type":{"name":"Cruiser","title":"Cruiser"},"nation":{"name":"japan","title":"Japan"}},
        {"title":"Kiev","description":"Destroyer","icons":{"large":"k.png"},"level":8,
         "type":{"name":"Destroyer","title":"Destroyer"},"nation":{"name":"ussr","title":"USSR"}}
    ]}}"#;

    fn new_state() -> AppState {
        AppState::new(
            ClientConfig::default(),
            "World of Warships".to_string(),
            GridGeometry::default(),
            Theme::default(),
        )
    }

    fn reply_context() -> BTreeMap<String, String> {
        BTreeMap::from([(CONTEXT_KEY.to_string(), CONTEXT_VEHICLES.to_string())])
    }

    fn loaded_state() -> AppState {
        let mut state = new_state();
        handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        handle_event(
            &mut state,
            &Event::QueryCompleted {
                status: 200,
                body: BODY.as_bytes().to_vec(),
                context: reply_context(),
            },
        )
        .unwrap();
        state
    }

    #[test]
    fn grant_sends_exactly_one_request() {
        let mut state = new_state();
        let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        assert_eq!(actions.len(), 1);
        assert!(state.request_sent);

        let (render, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn successful_reply_populates_catalog() {
        let state = loaded_state();
        assert_eq!(state.vehicles().len(), 3);
        assert_eq!(state.filtered, vec![0, 1, 2]);
        assert_eq!(state.options.levels(), &[5, 8]);
    }

    #[test]
    fn failed_reply_becomes_error_state() {
        let mut state = new_state();
        let (render, _) = handle_event(
            &mut state,
            &Event::QueryCompleted {
                status: 503,
                body: Vec::new(),
                context: reply_context(),
            },
        )
        .unwrap();
        assert!(render);
        assert_eq!(
            state.fetch,
            FetchState::Error("Response not successful: Received status code 503".to_string())
        );
    }

    #[test]
    fn unrelated_replies_are_ignored() {
        let mut state = new_state();
        let (render, _) = handle_event(
            &mut state,
            &Event::QueryCompleted {
                status: 200,
                body: BODY.as_bytes().to_vec(),
                context: BTreeMap::new(),
            },
        )
        .unwrap();
        assert!(!render);
        assert!(state.fetch.is_loading());
    }

    #[test]
    fn duplicate_reply_does_not_replace_loaded_catalog() {
        let mut state = loaded_state();
        let (render, _) = handle_event(
            &mut state,
            &Event::QueryCompleted {
                status: 500,
                body: Vec::new(),
                context: reply_context(),
            },
        )
        .unwrap();
        assert!(!render);
        assert_eq!(state.vehicles().len(), 3);
    }

    #[test]
    fn denied_permission_shows_error() {
        let mut state = new_state();
        let (render, actions) = handle_event(&mut state, &Event::PermissionsDenied).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(
            state.fetch,
            FetchState::Error("Web access permission was denied".to_string())
        );
    }

    #[test]
    fn cycling_options_filters_and_wraps() {
        let mut state = loaded_state();

        handle_event(&mut state, &Event::NextOption).unwrap();
        assert_eq!(state.filters.level, Some(5));
        assert_eq!(state.filtered, vec![0]);

        handle_event(&mut state, &Event::FocusNextFilter).unwrap();
        assert_eq!(state.focus, FilterDimension::Nation);
        handle_event(&mut state, &Event::PreviousOption).unwrap();
        assert_eq!(state.filters.nation.as_deref(), Some("japan"));
        assert!(state.filtered.is_empty());

        handle_event(&mut state, &Event::ResetFilter).unwrap();
        assert_eq!(state.filters.nation, None);
        assert_eq!(state.filtered, vec![0]);

        let (render, _) = handle_event(&mut state, &Event::ResetAllFilters).unwrap();
        assert!(render);
        assert!(state.filters.is_empty());
        assert_eq!(state.filtered, vec![0, 1, 2]);

        let (render, _) = handle_event(&mut state, &Event::ResetAllFilters).unwrap();
        assert!(!render);
    }

    #[test]
    fn option_keys_do_nothing_without_records() {
        let mut state = new_state();
        state.load_fetch_state(FetchState::Error("boom".to_string()));
        let (render, _) = handle_event(&mut state, &Event::NextOption).unwrap();
        assert!(!render);
        assert_eq!(state.filters.level, None);
    }

    #[test]
    fn scrolling_follows_viewport() {
        let mut state = new_state();
        let vehicles: Vec<_> = (0..30)
            .map(|i| crate::domain::Vehicle {
                title: format!("Ship {i}"),
                description: "d".to_string(),
                icon: String::new(),
                level: 1,
                kind: crate::domain::Category::new("DD", "Destroyer"),
                nation: crate::domain::Category::new("ussr", "USSR"),
            })
            .collect();
        state.load_fetch_state(FetchState::Success(vehicles));
        handle_event(&mut state, &Event::Resize { rows: 34, cols: 90 }).unwrap();
        assert_eq!(state.page_rows(), 2);

        assert!(handle_event(&mut state, &Event::ScrollDown).unwrap().0);
        assert_eq!(state.scroll_row, 1);
        handle_event(&mut state, &Event::PageDown).unwrap();
        assert_eq!(state.scroll_row, 3);
        handle_event(&mut state, &Event::ScrollToBottom).unwrap();
        assert_eq!(state.scroll_row, 8);
        handle_event(&mut state, &Event::PageUp).unwrap();
        assert_eq!(state.scroll_row, 6);
        handle_event(&mut state, &Event::ScrollToTop).unwrap();
        assert_eq!(state.scroll_row, 0);
        assert!(!handle_event(&mut state, &Event::ScrollUp).unwrap().0);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = new_state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn span_formatting_hides_bodies() {
        let event = Event::QueryCompleted {
            status: 200,
            body: vec![0; 42],
            context: BTreeMap::new(),
        };
        assert_eq!(format!("{:?}", EventKind(&event)), "QueryCompleted(200, 42 bytes)");
        assert_eq!(format!("{:?}", EventKind(&Event::PageUp)), "PageUp");
    }
}
