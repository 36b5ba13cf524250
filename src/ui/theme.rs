//! Theme management and stylesheet generation.
//!
//! This module defines the color scheme for rendered pages, supporting both
//! built-in themes and custom themes loaded from TOML files. A theme renders
//! into the `<style>` block of the page shell.
//!
//! # Built-in Themes
//!
//! - `uncp`: black and gold on a light page (default)
//! - `high-contrast`: light text on black with a gold accent
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! page_bg = "#f8f9fa"
//! text = "#212529"
//! text_muted = "#6c757d"
//! title_fg = "#000000"
//! accent = "#ffd700"
//! card_bg = "#ffffff"
//! card_border = "#dee2e6"
//! divider = "#e9ecef"
//! ```
//!
//! # Example
//!
//! ```rust
//! use campusnav::ui::theme::Theme;
//!
//! let theme = Theme::from_name("uncp").unwrap();
//! assert!(theme.stylesheet().contains(".building-type-grid"));
//! ```

use crate::domain::{NavigateError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Color scheme configuration for page rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all page elements.
    pub colors: ThemeColors,
}

/// Color definitions, as `#rrggbb` hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Page background.
    pub page_bg: String,
    /// Body text.
    pub text: String,
    /// Secondary text (coordinates, distance).
    pub text_muted: String,

    /// Section title text.
    pub title_fg: String,
    /// Section title underline and card focus ring.
    pub accent: String,

    /// Card background.
    pub card_bg: String,
    /// Card border.
    pub card_border: String,
    /// Divider above the coordinates line.
    pub divider: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `uncp`, `high-contrast`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "uncp" => include_str!("../../themes/uncp.toml"),
            "high-contrast" => include_str!("../../themes/high-contrast.toml"),
            _ => return None,
        };

        Self::from_toml_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NavigateError::Theme`] if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The TOML content cannot be parsed (invalid syntax, missing fields)
    /// - Any color is not a `#rrggbb` hex string
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            NavigateError::Theme(format!("Failed to read theme file {}: {e}", path.display()))
        })?;

        Self::from_toml_str(&contents)
    }

    /// Parses and validates a theme from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`NavigateError::Theme`] on parse failure or an invalid color.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let theme: Self = toml::from_str(contents)
            .map_err(|e| NavigateError::Theme(format!("Failed to parse theme TOML: {e}")))?;
        theme.validate()?;
        Ok(theme)
    }

    fn validate(&self) -> Result<()> {
        let c = &self.colors;
        let named = [
            ("page_bg", &c.page_bg),
            ("text", &c.text),
            ("text_muted", &c.text_muted),
            ("title_fg", &c.title_fg),
            ("accent", &c.accent),
            ("card_bg", &c.card_bg),
            ("card_border", &c.card_border),
            ("divider", &c.divider),
        ];

        for (field, value) in named {
            if !is_hex_color(value) {
                return Err(NavigateError::Theme(format!(
                    "theme '{}': {field} must be a #rrggbb color, got {value:?}",
                    self.name
                )));
            }
        }
        Ok(())
    }

    /// Renders the theme as CSS for the page `<style>` block.
    ///
    /// Covers section spacing, the accented section title, the card grid with
    /// its 768px and 480px breakpoints, and the coordinates divider.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        let c = &self.colors;
        let mut css = String::with_capacity(2048);

        // Writing into a String cannot fail.
        let _ = write!(
            css,
            "body {{ background: {page_bg}; color: {text}; font-family: system-ui, sans-serif; margin: 0; padding: 2rem; }}
.results-title {{ color: {title_fg}; }}
.building-type-section {{ margin-bottom: 3rem; }}
.building-type-title {{ color: {title_fg}; font-size: 1.5rem; font-weight: 700; margin-bottom: 1.5rem; padding-bottom: 0.5rem; border-bottom: 3px solid {accent}; }}
.building-type-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1.5rem; }}
.building-card {{ background: {card_bg}; border: 1px solid {card_border}; border-radius: 8px; padding: 1.25rem; cursor: pointer; }}
.building-card:focus {{ outline: 3px solid {accent}; }}
.building-type, .building-distance {{ color: {text_muted}; font-size: 0.85rem; margin-right: 1rem; }}
.building-coordinates {{ margin-top: 0.75rem; padding-top: 0.75rem; border-top: 1px solid {divider}; }}
.building-coordinates small {{ color: {text_muted}; font-size: 0.8rem; }}
.no-results {{ text-align: center; color: {text_muted}; }}
@media (max-width: 768px) {{
  .building-type-grid {{ grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1rem; }}
  .building-type-title {{ font-size: 1.3rem; }}
}}
@media (max-width: 480px) {{
  .building-type-grid {{ grid-template-columns: 1fr; }}
  .building-type-section {{ margin-bottom: 2rem; }}
}}
",
            page_bg = c.page_bg,
            text = c.text,
            text_muted = c.text_muted,
            title_fg = c.title_fg,
            accent = c.accent,
            card_bg = c.card_bg,
            card_border = c.card_border,
            divider = c.divider,
        );

        css
    }
}

impl Default for Theme {
    /// Returns the default theme (`uncp`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("uncp").expect("Built-in uncp theme should always parse")
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::default().name, "uncp");
        assert_eq!(Theme::from_name("high-contrast").unwrap().name, "high-contrast");
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn stylesheet_carries_colors_and_breakpoints() {
        let css = Theme::default().stylesheet();
        assert!(css.contains("border-bottom: 3px solid #ffd700"));
        assert!(css.contains("@media (max-width: 768px)"));
        assert!(css.contains("@media (max-width: 480px)"));
        assert!(css.contains(".no-results { text-align: center;"));
    }

    #[test]
    fn invalid_color_is_rejected() {
        let toml = include_str!("../../themes/uncp.toml").replace("\"#ffd700\"", "\"gold\"");
        let err = Theme::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, NavigateError::Theme(ref msg) if msg.contains("accent")));
    }

    #[test]
    fn theme_file_round_trips_through_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_str!("../../themes/high-contrast.toml").as_bytes())
            .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme, Theme::from_name("high-contrast").unwrap());
    }

    #[test]
    fn missing_theme_file_is_a_theme_error() {
        let err = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(matches!(err, NavigateError::Theme(_)));
    }
}
