//! Event handling and state transition logic.
//!
//! This module is the dispatch table between a presentation surface and the
//! filter → group → render pipeline. Surfaces translate their native input
//! into [`Event`]s, call [`handle_event`], re-render when told to, and execute
//! the returned [`Action`]s.
//!
//! # Event Types
//!
//! - **Search**: `InputChanged`, `SearchClicked`, `SearchKey`
//! - **Card activation**: `CardClicked`, `CardKey`
//! - **Follow-up**: `DirectionsConfirmed`
//!
//! # Example
//!
//! ```rust
//! use campusnav::app::{handle_event, Action, AppState, Event};
//! use campusnav::Building;
//!
//! let mut state = AppState::loaded(vec![Building::new("Main Library", "Library")]);
//! let (render, actions) = handle_event(&mut state, &Event::InputChanged("lib".into()));
//! assert!(render);
//! assert_eq!(actions, vec![Action::ScrollToResults]);
//! ```

use super::phase::Key;
use crate::app::{Action, AppState, BuildingDetails};

/// Minimum trimmed length at which typing triggers a live search.
const LIVE_SEARCH_MIN_CHARS: usize = 2;

/// Events triggered by user input on the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search field value changed.
    ///
    /// Searches live when the trimmed value is empty or at least two
    /// characters long; otherwise only the input is recorded.
    InputChanged(String),

    /// The search trigger was clicked.
    SearchClicked,

    /// A key was pressed in the search field; Enter searches.
    SearchKey(Key),

    /// A card was clicked.
    CardClicked {
        /// The card's `data-building-id`.
        building_id: String,
    },

    /// A key was pressed on a focused card; Enter and Space activate.
    CardKey {
        /// The card's `data-building-id`.
        building_id: String,
        /// Key pressed.
        key: Key,
    },

    /// The user accepted a directions prompt.
    DirectionsConfirmed {
        /// Link from the accepted [`Action::ConfirmDirections`].
        url: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(render, actions)`: `render` is `true` when the results view changed and
/// must be re-rendered; `actions` are side effects to run in order.
///
/// In the error phase every event is ignored: `(false, vec![])`.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event = ?event).entered();

    if !state.phase.is_loaded() {
        tracing::debug!("ignoring event after failed load");
        return (false, vec![]);
    }

    match event {
        Event::InputChanged(value) => {
            state.input.clone_from(value);
            let typed = value.trim().chars().count();
            if typed == 0 || typed >= LIVE_SEARCH_MIN_CHARS {
                search(state)
            } else {
                tracing::trace!(typed, "below live search threshold");
                (false, vec![])
            }
        }
        Event::SearchClicked => search(state),
        Event::SearchKey(key) if key.submits() => search(state),
        Event::CardClicked { building_id } => activate_card(state, building_id),
        Event::CardKey { building_id, key } if key.activates() => {
            activate_card(state, building_id)
        }
        Event::DirectionsConfirmed { url } => {
            tracing::info!(%url, "opening directions");
            (false, vec![Action::OpenExternal { url: url.clone() }])
        }
        Event::SearchKey(_) | Event::CardKey { .. } => (false, vec![]),
    }
}

fn search(state: &mut AppState) -> (bool, Vec<Action>) {
    state.apply_search();

    let actions = if state.query.trim().is_empty() {
        vec![]
    } else {
        vec![Action::ScrollToResults]
    };
    (true, actions)
}

fn activate_card(state: &AppState, building_id: &str) -> (bool, Vec<Action>) {
    let Some(building) = state.find_building(building_id) else {
        tracing::debug!(building_id, "card does not resolve to a building");
        return (false, vec![]);
    };

    let details = BuildingDetails::from(building);
    let action = match building.directions_url() {
        Some(url) => Action::ConfirmDirections { details, url },
        None => Action::ShowDetails(details),
    };

    (false, vec![action])
}
