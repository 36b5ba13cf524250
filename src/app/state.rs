//! Application state management and view model derivation.
//!
//! [`AppState`] is the single owner of session state. It separates core data
//! (the working set, loaded once) from derived state (the filtered view,
//! recomputed on every search) so that no search can ever alter what was
//! loaded.
//!
//! # State Components
//!
//! - **Working set**: every building kept by the loader, read-only
//! - **Input**: current value of the search field, updated on every keystroke
//! - **Query**: the input value as of the last search that actually ran
//! - **Filtered view**: the working set filtered by the query
//! - **Phase**: loaded, or failed with a cause
//!
//! # Example
//!
//! ```rust
//! use campusnav::app::AppState;
//! use campusnav::Building;
//!
//! let mut state = AppState::loaded(vec![
//!     Building::new("Main Library", "Library"),
//!     Building::new("Starbucks", "Dining"),
//! ]);
//! state.input = "star".to_string();
//! state.apply_search();
//! assert_eq!(state.filtered().len(), 1);
//! ```

use super::phase::Phase;
use crate::catalog::{filter_buildings, group_buildings};
use crate::domain::{Building, LoadError};
use crate::ui::viewmodel::{compute_viewmodel, ResultsViewModel};

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    working_set: Vec<Building>,

    /// Current search field value, untrimmed.
    ///
    /// Updated by `InputChanged` events even when the live search threshold
    /// suppresses the search itself.
    pub input: String,

    /// Raw query applied by the most recent search.
    pub query: String,

    filtered: Vec<Building>,

    /// Session phase; fixed at construction.
    pub phase: Phase,
}

impl AppState {
    /// Creates the state for a successful load.
    ///
    /// The filtered view starts out equal to the working set, so the first
    /// render lists every building.
    #[must_use]
    pub fn loaded(working_set: Vec<Building>) -> Self {
        let filtered = working_set.clone();
        Self {
            working_set,
            input: String::new(),
            query: String::new(),
            filtered,
            phase: Phase::Loaded,
        }
    }

    /// Creates the state for a failed load.
    ///
    /// The working set is empty and stays empty for the whole session.
    #[must_use]
    pub fn failed(error: &LoadError) -> Self {
        let message = error.to_string();
        tracing::warn!(cause = %message, "session entering error phase");

        Self {
            working_set: Vec::new(),
            input: String::new(),
            query: String::new(),
            filtered: Vec::new(),
            phase: Phase::Error { message },
        }
    }

    /// Every building kept at load time, in payload order.
    #[must_use]
    pub fn working_set(&self) -> &[Building] {
        &self.working_set
    }

    /// Buildings matching the applied query, in working set order.
    #[must_use]
    pub fn filtered(&self) -> &[Building] {
        &self.filtered
    }

    /// Runs a search with the current input value.
    ///
    /// Replaces the applied query and the filtered view. The working set is
    /// untouched.
    pub fn apply_search(&mut self) {
        self.query.clone_from(&self.input);
        self.filtered = filter_buildings(&self.working_set, &self.query);

        tracing::debug!(
            query = %self.query,
            matched = self.filtered.len(),
            total = self.working_set.len(),
            "search applied"
        );
    }

    /// Resolves a card's building id by exact name against the working set.
    ///
    /// The working set is searched rather than the filtered view, so a card
    /// rendered from an earlier search still resolves.
    #[must_use]
    pub fn find_building(&self, building_id: &str) -> Option<&Building> {
        self.working_set.iter().find(|b| b.name == building_id)
    }

    /// Derives the results view model for the current state.
    ///
    /// Filter, group, and view are rebuilt from scratch on every call.
    #[must_use]
    pub fn view_model(&self) -> ResultsViewModel {
        match &self.phase {
            Phase::Error { .. } => ResultsViewModel::load_failed(),
            Phase::Loaded => {
                let groups = group_buildings(&self.filtered);
                compute_viewmodel(&self.query, &self.filtered, &groups)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::ResultsBody;

    fn campus() -> Vec<Building> {
        vec![
            Building::new("Main Library", "Library"),
            Building::new("Starbucks", "Dining"),
            Building::new("Belk Residence Hall", "Residence Hall"),
        ]
    }

    #[test]
    fn loaded_state_shows_everything() {
        let state = AppState::loaded(campus());
        assert_eq!(state.filtered(), state.working_set());
        assert_eq!(state.view_model().title, "Campus Locations (3 total)");
    }

    #[test]
    fn search_never_mutates_the_working_set() {
        let mut state = AppState::loaded(campus());
        state.input = "hall".to_string();
        state.apply_search();

        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.working_set(), campus().as_slice());
    }

    #[test]
    fn lookup_uses_the_working_set_not_the_filtered_view() {
        let mut state = AppState::loaded(campus());
        state.input = "starbucks".to_string();
        state.apply_search();

        assert!(state.find_building("Main Library").is_some());
        assert!(state.find_building("main library").is_none());
    }

    #[test]
    fn failed_state_renders_error_view() {
        let state = AppState::failed(&LoadError::Status {
            status: 503,
            reason: "Service Unavailable".to_string(),
        });
        assert!(state.working_set().is_empty());
        assert!(matches!(state.view_model().body, ResultsBody::Error { .. }));
        assert!(matches!(state.phase, Phase::Error { ref message } if message.contains("503")));
    }
}
