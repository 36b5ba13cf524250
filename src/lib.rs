//! campusnav: a campus building directory with search and type grouping.
//!
//! campusnav loads the campus building list once, lets the user narrow it
//! with a case-insensitive text query, groups the matches by building type in
//! a curated order, and renders them as escaped HTML cards. Activating a card
//! reveals its details and, when the building has coordinates, offers a
//! directions link behind an explicit confirmation.
#![allow(clippy::multiple_crate_versions)]
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs): CLI, one-shot and interactive    │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Dispatch table
//! │  - Event handling                                   │
//! │  - Action emission                                  │
//! │  - View model derivation                            │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Loader Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (loader/)     │
//! │ - HTML render │   │ - Filtering   │   │ - HTTP / file │
//! │ - Theming     │   │ - Grouping    │   │ - Validation  │
//! │ - Components  │   │ - Collation   │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Building model (domain/building)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - Console logs, optional OTLP file export          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session state with the event/action dispatch table
//! - [`catalog`]: Search filtering, type grouping, collation
//! - [`domain`]: Core domain types (Building, errors)
//! - [`infrastructure`]: Platform directories
//! - [`loader`]: Building sources and payload validation
//! - [`observability`]: Tracing setup and trace export
//! - [`ui`]: View models, HTML rendering, themes
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/campusnav/config.toml
//! endpoint = "http://127.0.0.1:5000/buildings"
//! theme = "uncp"
//! trace_level = "info"
//! output = "campusnav.html"
//! ```
//!
//! # Example
//!
//! ```rust
//! use campusnav::loader::StaticSource;
//! use campusnav::{handle_event, initialize, render_page, Event, Theme};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let source = StaticSource::new(r#"[
//!     {"name": "Mary Livermore Library", "type": "Library", "lat": 34.6881, "lng": -79.2001},
//!     {"name": "Starbucks", "type": "Dining"}
//! ]"#);
//! let mut state = initialize(&source).await;
//!
//! let (render, _actions) = handle_event(&mut state, &Event::InputChanged("star".into()));
//! assert!(render);
//!
//! let html = render_page(&state.view_model(), &Theme::default());
//! assert!(html.contains("Search Results for &quot;star&quot; (1 found)"));
//! # });
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod loader;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, BuildingDetails, Event, Key, Phase};
pub use domain::{Building, Coordinates, LoadError, NavigateError, Result};
pub use ui::{render_page, render_results, Theme};

use loader::BuildingSource;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Endpoint of the bundled backend when run locally.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/buildings";

/// Application configuration.
///
/// Read from TOML; every key is optional. Command-line flags override file
/// values in the binary.
///
/// # Example
///
/// ```toml
/// endpoint = "https://campus.example.edu/buildings"
/// theme = "high-contrast"
/// theme_file = "~/themes/mine.toml"
/// trace_level = "debug"
/// trace_file = "campusnav-otlp.json"
/// output = "directory.html"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL answering `GET` with the building list.
    pub endpoint: String,
    /// Built-in theme name: `uncp` or `high-contrast`.
    ///
    /// Ignored if `theme_file` is set.
    pub theme: Option<String>,
    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme`. See [`ui::theme`] for format.
    pub theme_file: Option<PathBuf>,
    /// Log filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or a full
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,
    /// OTLP JSON trace export file; export is off when unset.
    ///
    /// Relative paths resolve under the platform data directory.
    pub trace_file: Option<PathBuf>,
    /// Where the one-shot mode writes the page; `-` means stdout.
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            theme: None,
            theme_file: None,
            trace_level: None,
            trace_file: None,
            output: PathBuf::from("campusnav.html"),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// Paths are resolved: a leading `~` expands to the home directory and a
    /// relative `trace_file` lands in the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns [`NavigateError::Config`] on invalid TOML, wrongly typed keys,
    /// or an empty endpoint.
    ///
    /// # Example
    ///
    /// ```rust
    /// use campusnav::Config;
    ///
    /// let config = Config::from_toml_str(r#"theme = "high-contrast""#)?;
    /// assert_eq!(config.theme.as_deref(), Some("high-contrast"));
    /// assert_eq!(config.endpoint, campusnav::DEFAULT_ENDPOINT);
    /// # Ok::<(), campusnav::NavigateError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(contents)
            .map_err(|e| NavigateError::Config(format!("Failed to parse config TOML: {e}")))?;

        if config.endpoint.trim().is_empty() {
            return Err(NavigateError::Config("endpoint must not be empty".to_string()));
        }

        config.theme_file = config
            .theme_file
            .map(|path| infrastructure::expand_tilde(&path.to_string_lossy()));
        config.trace_file = config.trace_file.map(|path| {
            let path = infrastructure::expand_tilde(&path.to_string_lossy());
            if path.is_relative() {
                infrastructure::data_dir().join(path)
            } else {
                path
            }
        });

        Ok(config)
    }

    /// Loads configuration from `path`, or from the default location.
    ///
    /// A missing file at the default location yields [`Config::default`]. A
    /// missing file at an explicitly given path is an error.
    ///
    /// # Errors
    ///
    /// Returns [`NavigateError::Config`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (infrastructure::config_file(), false),
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(NavigateError::Config(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Resolves the configured theme.
    ///
    /// `theme_file` wins over `theme`. A theme that fails to load is logged
    /// and replaced by the default theme.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file.display(), error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Performs the session's single load and builds its state.
///
/// On success the state starts in the loaded phase with the full list shown;
/// on failure it starts, and stays, in the error phase.
///
/// # Side Effects
///
/// - Exactly one read from `source`
/// - Logs the load outcome
pub async fn initialize(source: &dyn BuildingSource) -> AppState {
    tracing::debug!("initializing campusnav");

    match loader::load_working_set(source).await {
        Ok(working_set) => AppState::loaded(working_set),
        Err(e) => AppState::failed(&e),
    }
}
