//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Two are built in and embedded at compile time:
//!
//! - `harbor-night`: dark theme with brass accents (default)
//! - `harbor-day`: light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e0e6f0"
//! text_normal = "#c8d1dc"
//! text_dim = "#6b7a8f"
//! border = "#3b4a5e"
//! control_fg = "#9fb3c8"
//! focus_fg = "#0f1722"
//! focus_bg = "#e8b04b"
//! card_border = "#4f6a86"
//! card_title_fg = "#f2f5f9"
//! card_meta_fg = "#e8b04b"
//! empty_state_fg = "#7fb3e0"
//! loading_fg = "#7fb3e0"
//! error_fg = "#e06c75"
//! ```
//!
//! `header_bg` is optional.

use crate::domain::{FleetviewError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "harbor-night";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex color definitions for all UI elements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Footer and secondary text.
    pub text_dim: String,
    pub border: String,

    /// Unfocused filter dropdowns.
    pub control_fg: String,
    /// Focused filter dropdown.
    pub focus_fg: String,
    pub focus_bg: String,

    pub card_border: String,
    pub card_title_fg: String,
    /// Level, nation and type lines of a card.
    pub card_meta_fg: String,

    pub empty_state_fg: String,
    pub loading_fg: String,
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fleetview::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("harbor-day").unwrap();
    /// assert_eq!(theme.name, "harbor-day");
    /// assert!(Theme::from_name("unknown").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "harbor-night" => include_str!("../../themes/harbor-night.toml"),
            "harbor-day" => include_str!("../../themes/harbor-day.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FleetviewError::Theme`] if the file cannot be read or is not
    /// a valid theme document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| FleetviewError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| FleetviewError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Parses `#rrggbb`; malformed input maps to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the built-in `harbor-night` theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in harbor-night theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        for name in ["harbor-night", "harbor-day"] {
            let theme = Theme::from_name(name);
            assert!(theme.is_some(), "{name} should parse");
        }
        assert_eq!(Theme::default().name, DEFAULT_THEME);
        assert!(Theme::from_name("harbor-day").and_then(|t| t.colors.header_bg).is_some());
    }

    #[test]
    fn hex_colors_become_escapes() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("#bad"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn theme_file_round_trips_through_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let source = toml::to_string(&Theme::default()).unwrap();
        file.write_all(source.replace("harbor-night", "custom").as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.colors, Theme::default().colors);
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();
        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, FleetviewError::Theme(_)));

        let missing = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(missing.to_string().contains("Failed to read theme file"));
    }
}
