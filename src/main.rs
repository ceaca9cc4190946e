//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the fleetview library and the Zellij
//! plugin system. All host calls live here; the library only sees
//! [`Event`]s and returns [`Action`]s.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`
//! 3. **Fetch**: On grant, send the catalog query with `web_request`
//! 4. **Update**: Translate host events, delegate to `handle_event`
//! 5. **Render**: Record the pane size, then call the library renderer
//!
//! # Event Mapping
//!
//! - `PermissionRequestResult(Granted)` → `Event::PermissionsGranted`
//! - `PermissionRequestResult(Denied)` → `Event::PermissionsDenied`
//! - `WebRequestResult` → `Event::QueryCompleted { status, body, context }`
//! - `Key` → filter, scroll and close events (see below)
//!
//! # Keybindings
//!
//! - `Tab` / `Shift+Tab`: Focus next / previous filter
//! - `l`/`Right`, `h`/`Left`: Next / previous option of the focused filter
//! - `a`/`Backspace`: Reset the focused filter
//! - `x`: Reset all filters
//! - `j`/`Down`, `k`/`Up`: Scroll one grid row
//! - `d`/`PageDown`, `u`/`PageUp`: Scroll one page
//! - `g`/`Home`, `G`/`End`: First / last row
//! - `q`/`Esc`: Hide the plugin

#![allow(clippy::multiple_crate_versions)]

use fleetview::{handle_event, Action, Config, Event};
use std::collections::BTreeMap;
use zellij_tile::prelude::*;

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: fleetview::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: fleetview::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, requests web access and subscribes to events.
    ///
    /// The catalog request is not sent here; it waits for the permission
    /// result.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        fleetview::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            endpoint = %config.client.endpoint(),
            language = %config.client.language(),
            "parsed configuration"
        );
        self.app = fleetview::initialize(&config);

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a host event, handles it, and runs the resulting actions.
    ///
    /// Returns `true` if the pane should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Event::QueryCompleted { status, body, context }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => Event::PermissionsGranted,
                PermissionStatus::Denied => Event::PermissionsDenied,
            },
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Renders the plugin UI.
    ///
    /// The pane size is only known here, so it is fed through the handler as
    /// a resize first to keep the scroll position in range.
    fn render(&mut self, rows: usize, cols: usize) {
        if self.app.viewport != (rows, cols) {
            self.dispatch(&Event::Resize { rows, cols });
        }
        fleetview::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs one event through the library and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
            return Some(Event::FocusPreviousFilter);
        }

        Some(match key.bare_key {
            BareKey::Tab => Event::FocusNextFilter,
            BareKey::Right | BareKey::Char('l') => Event::NextOption,
            BareKey::Left | BareKey::Char('h') => Event::PreviousOption,
            BareKey::Backspace | BareKey::Char('a') => Event::ResetFilter,
            BareKey::Char('x') => Event::ResetAllFilters,
            BareKey::Down | BareKey::Char('j') => Event::ScrollDown,
            BareKey::Up | BareKey::Char('k') => Event::ScrollUp,
            BareKey::PageDown | BareKey::Char('d') => Event::PageDown,
            BareKey::PageUp | BareKey::Char('u') => Event::PageUp,
            BareKey::Home | BareKey::Char('g') => Event::ScrollToTop,
            BareKey::End | BareKey::Char('G') => Event::ScrollToBottom,
            BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::SendQuery(request) => {
                tracing::debug!(url = %request.url, body_len = request.body.len(), "sending web request");
                web_request(
                    request.url,
                    HttpVerb::Post,
                    request.headers,
                    request.body,
                    request.context,
                );
            }
        }
    }
}
