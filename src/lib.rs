//! Fleetview: a Zellij plugin for browsing the warship vehicle glossary.
//!
//! Fleetview fetches the vehicle catalog from a GraphQL endpoint once per
//! load and shows it as a grid of cards:
//! - Loading, error, and success states driven by a single request
//! - Level, nation, and type filters combined conjunctively
//! - Filter options derived from the records actually received
//! - A fixed-cell grid windowed to the visible rows

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - Permissions, web requests, key mapping           │  ← Host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Fetch Layer   │
//! │ (ui/)         │   │ (catalog/)    │   │ (api/)        │
//! │ - Rendering   │   │ - Filters     │   │ - GraphQL     │
//! │ - Theming     │   │ - Options     │   │ - Decoding    │
//! │ - Components  │   │ - Grid layout │   │ - FetchState  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Vehicle model (domain/vehicle)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/fleetview.wasm" {
//!         endpoint "https://vortex.korabli.su/api/graphql/glossary/"
//!         language "en"
//!         title "World of Warships"
//!         theme "harbor-day"
//!         trace_level "fleetview=debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fleetview::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(matches!(actions.as_slice(), [Action::SendQuery(_)]));
//! # Ok::<(), fleetview::FleetviewError>(())
//! ```

pub mod api;
pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use api::{ClientConfig, FetchState};
pub use app::{handle_event, Action, AppState, Event};
pub use catalog::GridGeometry;
pub use domain::{FleetviewError, Result, Vehicle};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Largest accepted cell dimension or padding, in grid units.
pub const MAX_CELL_UNITS: u32 = 10_000;

/// Header text used when no `title` is configured.
pub const DEFAULT_TITLE: &str = "World of Warships";

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint and language of the catalog query.
    pub client: ClientConfig,

    /// Header text. Default: `"World of Warships"`
    pub title: String,

    /// Built-in theme name: `harbor-night` or `harbor-day`.
    ///
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a TOML theme file. `~` expands to the sandbox home.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: String,

    /// Card cell size and padding in grid units.
    pub geometry: GridGeometry,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            title: DEFAULT_TITLE.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
            geometry: GridGeometry::default(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing, blank or unparsable values fall back to their defaults. An
    /// endpoint or language that [`ClientConfig::new`] rejects falls back to
    /// the default client. A zero cell width or height, or any cell value
    /// above [`MAX_CELL_UNITS`], is ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use fleetview::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("language".to_string(), "en".to_string());
    /// map.insert("cell_width".to_string(), "400".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.client.language(), "en");
    /// assert_eq!(config.geometry.cell_width, 400);
    /// assert_eq!(config.geometry.cell_height, 700);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };
        let units = |key: &str| {
            config
                .get(key)
                .and_then(|value| value.trim().parse::<u32>().ok())
                .filter(|&units| units <= MAX_CELL_UNITS)
        };

        let client = if text("endpoint").is_some() || text("language").is_some() {
            let endpoint = text("endpoint").unwrap_or_else(|| defaults.client.endpoint().to_string());
            let language = text("language").unwrap_or_else(|| defaults.client.language().to_string());
            ClientConfig::new(endpoint, language).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid client configuration, using default endpoint");
                ClientConfig::default()
            })
        } else {
            defaults.client
        };

        let geometry = GridGeometry {
            cell_width: units("cell_width")
                .filter(|&w| w > 0)
                .unwrap_or(defaults.geometry.cell_width),
            cell_height: units("cell_height")
                .filter(|&h| h > 0)
                .unwrap_or(defaults.geometry.cell_height),
            padding: units("cell_padding").unwrap_or(defaults.geometry.padding),
        };

        Self {
            client,
            title: text("title").unwrap_or(defaults.title),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level").unwrap_or(defaults.trace_level),
            geometry,
        }
    }
}

/// Creates the application state for a fresh plugin load.
///
/// The theme comes from `theme_file`, then `theme_name`, then the built-in
/// default; a theme that fails to load is logged and skipped. The returned
/// state is loading and has not sent its request yet.
///
/// # Example
///
/// ```rust
/// use fleetview::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.fetch.is_loading());
/// assert_eq!(state.title, "World of Warships");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing fleetview plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.client.clone(), config.title.clone(), config.geometry, theme)
}
