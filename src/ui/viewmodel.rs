//! View model types representing renderable results.
//!
//! View models are computed from the query, the filtered view, and its
//! grouping, and consumed by the renderer. They hold display-ready but
//! unescaped text: escaping is the renderer's job, at the point where text
//! meets markup.
//!
//! # Example
//!
//! ```rust
//! use campusnav::catalog::{filter_buildings, group_buildings};
//! use campusnav::ui::viewmodel::{compute_viewmodel, ResultsBody};
//! use campusnav::Building;
//!
//! let working_set = vec![
//!     Building::new("Main Library", "Library"),
//!     Building::new("Annex", "Academic"),
//! ];
//! let filtered = filter_buildings(&working_set, "lib");
//! let groups = group_buildings(&filtered);
//! let vm = compute_viewmodel("lib", &filtered, &groups);
//!
//! assert_eq!(vm.title, "Search Results for \"lib\" (1 found)");
//! assert!(matches!(vm.body, ResultsBody::Groups(ref g) if g.len() == 1));
//! ```

use crate::catalog::BuildingGroup;
use crate::domain::Building;
use crate::ui::helpers::placeholder_distance;

/// Notice shown in place of results when loading failed.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load campus buildings. Please check if the backend server is running.";

/// Complete results view model.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsViewModel {
    /// Results heading text.
    pub title: String,
    /// Content of the results container.
    pub body: ResultsBody,
}

/// What the results container shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsBody {
    /// One section per type group, in display order.
    Groups(Vec<GroupView>),
    /// The filtered view is empty; `query` is echoed back to the user.
    NoResults { query: String },
    /// Loading failed; building data is never shown in this state.
    Error { message: String },
}

/// One type section.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupView {
    /// Type label.
    pub kind: String,
    /// Number of buildings in the section.
    pub count: usize,
    /// Cards in name order.
    pub cards: Vec<CardView>,
}

/// Display information for a single building card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Building name, also the card's lookup key.
    pub name: String,
    /// Type description from the fixed table.
    pub description: String,
    /// Type label.
    pub kind: String,
    /// Placeholder distance, or "Distance unknown".
    pub distance: String,
    /// Formatted coordinates, when known.
    pub coordinates: Option<String>,
}

impl CardView {
    /// Builds the card for `building`.
    #[must_use]
    pub fn from_building(building: &Building) -> Self {
        Self {
            name: building.name.clone(),
            description: building.description().to_string(),
            kind: building.kind.clone(),
            distance: placeholder_distance(building).to_string(),
            coordinates: building.coordinates.map(|c| c.to_string()),
        }
    }
}

impl ResultsViewModel {
    /// View model for the error phase.
    #[must_use]
    pub fn load_failed() -> Self {
        Self {
            title: "Campus Locations".to_string(),
            body: ResultsBody::Error {
                message: LOAD_FAILURE_MESSAGE.to_string(),
            },
        }
    }
}

/// Computes the results view model.
///
/// # Parameters
///
/// * `raw_query` - Query as typed; trimmed for display, case preserved
/// * `filtered` - Filtered view the title counts
/// * `groups` - Grouping of `filtered`, already in display order
///
/// # Title
///
/// - Non-empty query: `Search Results for "<query>" (<n> found)`
/// - Empty query: `Campus Locations (<n> total)`
#[must_use]
pub fn compute_viewmodel(
    raw_query: &str,
    filtered: &[Building],
    groups: &[BuildingGroup],
) -> ResultsViewModel {
    let query = raw_query.trim();
    let count = filtered.len();

    let title = if query.is_empty() {
        format!("Campus Locations ({count} total)")
    } else {
        format!("Search Results for \"{query}\" ({count} found)")
    };

    let body = if filtered.is_empty() {
        ResultsBody::NoResults {
            query: query.to_string(),
        }
    } else {
        ResultsBody::Groups(
            groups
                .iter()
                .map(|group| GroupView {
                    kind: group.kind.clone(),
                    count: group.buildings.len(),
                    cards: group.buildings.iter().map(CardView::from_building).collect(),
                })
                .collect(),
        )
    };

    ResultsViewModel { title, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{filter_buildings, group_buildings};

    fn compute(working_set: &[Building], query: &str) -> ResultsViewModel {
        let filtered = filter_buildings(working_set, query);
        let groups = group_buildings(&filtered);
        compute_viewmodel(query, &filtered, &groups)
    }

    #[test]
    fn empty_query_title_counts_everything() {
        let working_set = [Building::new("A", "Dining"), Building::new("B", "Library")];
        assert_eq!(compute(&working_set, "  ").title, "Campus Locations (2 total)");
    }

    #[test]
    fn search_title_keeps_query_case_but_trims_it() {
        let working_set = [Building::new("Main Library", "Library")];
        assert_eq!(
            compute(&working_set, "  LIB ").title,
            "Search Results for \"LIB\" (1 found)"
        );
    }

    #[test]
    fn empty_filtered_view_becomes_no_results() {
        let working_set = [Building::new("Main Library", "Library")];
        let vm = compute(&working_set, "<script>");
        assert_eq!(vm.title, "Search Results for \"<script>\" (0 found)");
        assert_eq!(
            vm.body,
            ResultsBody::NoResults {
                query: "<script>".to_string()
            }
        );
    }

    #[test]
    fn cards_carry_description_distance_and_coordinates() {
        let working_set = [
            Building::new("Mary Livermore Library", "Library").at(34.6881, -79.2001),
            Building::new("Shed", "Storage"),
        ];
        let ResultsBody::Groups(groups) = compute(&working_set, "").body else {
            panic!("expected groups");
        };

        let library = &groups[0].cards[0];
        assert_eq!(library.description, "Library with study spaces and resources");
        assert!(library.distance.ends_with(" miles"));
        assert_eq!(library.coordinates.as_deref(), Some("34.6881, -79.2001"));

        let shed = &groups[1].cards[0];
        assert_eq!(shed.description, "Campus facility");
        assert_eq!(shed.distance, "Distance unknown");
        assert!(shed.coordinates.is_none());
    }

    #[test]
    fn group_counts_match_cards() {
        let working_set = [
            Building::new("B", "Dining"),
            Building::new("A", "Dining"),
            Building::new("C", "Academic"),
        ];
        let ResultsBody::Groups(groups) = compute(&working_set, "").body else {
            panic!("expected groups");
        };
        assert_eq!(groups[0].kind, "Dining");
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].cards[0].name, "A");
        assert_eq!(groups[1].count, 1);
    }

    #[test]
    fn load_failure_view_has_no_building_data() {
        let vm = ResultsViewModel::load_failed();
        assert!(matches!(vm.body, ResultsBody::Error { ref message } if message == LOAD_FAILURE_MESSAGE));
    }
}
