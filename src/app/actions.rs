//! Actions representing side effects to be executed by the presentation surface.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! surface executes them in order: scrolling, showing dialogs, and opening
//! external links are all outside the core.
//!
//! # Example
//!
//! ```rust
//! use campusnav::app::{Action, BuildingDetails};
//! use campusnav::Building;
//!
//! let details = BuildingDetails::from(&Building::new("Main Library", "Library"));
//! let action = Action::ShowDetails(details);
//! assert!(matches!(action, Action::ShowDetails(_)));
//! ```

use crate::domain::{Building, Coordinates};
use std::fmt;

/// Commands representing side effects to be executed by the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Brings the results container into view.
    ///
    /// Emitted after a search with a non-empty query.
    ScrollToResults,

    /// Shows building details with no follow-up choice.
    ///
    /// Emitted when the activated building has no coordinates.
    ShowDetails(BuildingDetails),

    /// Shows building details and asks whether to open directions.
    ///
    /// A positive answer is reported back as
    /// [`Event::DirectionsConfirmed`](crate::app::Event::DirectionsConfirmed).
    ConfirmDirections {
        /// Details shown in the prompt.
        details: BuildingDetails,
        /// Directions link opened on confirmation.
        url: String,
    },

    /// Opens a URL outside the application.
    OpenExternal {
        /// Link to open.
        url: String,
    },
}

/// What a card activation reveals about a building.
///
/// Displays as the dialog text:
///
/// ```text
/// 📍 NAME
///
/// Type: TYPE
/// Location: LAT, LNG
///
/// Would you like directions to this location?
/// ```
///
/// The last two parts appear only when coordinates are known.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingDetails {
    pub name: String,
    pub kind: String,
    pub coordinates: Option<Coordinates>,
}

impl From<&Building> for BuildingDetails {
    fn from(building: &Building) -> Self {
        Self {
            name: building.name.clone(),
            kind: building.kind.clone(),
            coordinates: building.coordinates,
        }
    }
}

impl fmt::Display for BuildingDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "📍 {}\n\nType: {}", self.name, self.kind)?;
        if let Some(coordinates) = self.coordinates {
            write!(
                f,
                "\nLocation: {coordinates}\n\nWould you like directions to this location?"
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_without_coordinates() {
        let details = BuildingDetails::from(&Building::new("Annex", "Academic"));
        assert_eq!(details.to_string(), "📍 Annex\n\nType: Academic");
    }

    #[test]
    fn details_with_coordinates_ask_about_directions() {
        let details = BuildingDetails::from(&Building::new("Old Main", "Landmark").at(34.6881, -79.2));
        assert_eq!(
            details.to_string(),
            "📍 Old Main\n\nType: Landmark\nLocation: 34.6881, -79.2000\n\nWould you like directions to this location?"
        );
    }
}
