//! Building domain model.
//!
//! A [`Building`] is one entry of the campus directory. Buildings are created
//! once by the loader and never mutated afterwards; every derived view (search
//! results, type groups, rendered cards) is built from clones or references.

use std::fmt;

/// Base URL used for the directions hand-off.
const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/?api=1&destination=";

/// Description shown for types missing from the description table.
pub const GENERIC_DESCRIPTION: &str = "Campus facility";

/// Fixed description table keyed by exact building type.
const DESCRIPTIONS: &[(&str, &str)] = &[
    ("Academic", "Academic building with classrooms and offices"),
    ("Administration", "Administrative offices and services"),
    ("Library", "Library with study spaces and resources"),
    ("Student Life", "Student activities and services"),
    ("Student Services", "Campus support services for students"),
    ("Residence Hall", "Student housing and dormitory"),
    ("Apartments", "Student apartment complex"),
    ("Dining", "Dining and food services"),
    ("Athletics", "Athletic facilities and sports venues"),
    ("Fitness / Gym", "Fitness center and recreational facilities"),
    ("Aquatics / Fitness", "Swimming and aquatic facilities"),
    ("Recreation", "Recreational facilities and activities"),
    ("Performing Arts / Auditorium", "Theater and performing arts venue"),
    ("Historic / Student Services", "Historic building with student services"),
    ("Landmark", "Campus landmark and gathering space"),
];

/// Geographic position of a building.
///
/// Displays as `"lat, lng"` with four decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// A campus building retained in the working set.
///
/// # Fields
///
/// - `name`: trimmed, non-empty display name; unique lookup key within a session
/// - `kind`: trimmed, non-empty building type (the payload's `type` field)
/// - `coordinates`: present only when the payload carried both `lat` and `lng`
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub name: String,
    pub kind: String,
    pub coordinates: Option<Coordinates>,
}

impl Building {
    /// Creates a building without coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use campusnav::Building;
    ///
    /// let building = Building::new("Main Library", "Library");
    /// assert_eq!(building.kind, "Library");
    /// assert!(building.coordinates.is_none());
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            coordinates: None,
        }
    }

    /// Returns the same building positioned at `lat`, `lng`.
    #[must_use]
    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.coordinates = Some(Coordinates { lat, lng });
        self
    }

    /// Looks up the descriptive blurb for this building's type.
    ///
    /// Falls back to [`GENERIC_DESCRIPTION`] for unrecognized types.
    ///
    /// # Examples
    ///
    /// ```
    /// use campusnav::Building;
    ///
    /// assert_eq!(
    ///     Building::new("Old Main", "Landmark").description(),
    ///     "Campus landmark and gathering space"
    /// );
    /// assert_eq!(Building::new("Shed", "Storage").description(), "Campus facility");
    /// ```
    #[must_use]
    pub fn description(&self) -> &'static str {
        DESCRIPTIONS
            .iter()
            .find(|(kind, _)| *kind == self.kind)
            .map_or(GENERIC_DESCRIPTION, |(_, description)| *description)
    }

    /// Builds the external directions link, if the building has coordinates.
    ///
    /// Coordinates are printed at full precision so the destination matches
    /// the payload exactly.
    #[must_use]
    pub fn directions_url(&self) -> Option<String> {
        self.coordinates
            .map(|c| format!("{DIRECTIONS_BASE_URL}{},{}", c.lat, c.lng))
    }
}
