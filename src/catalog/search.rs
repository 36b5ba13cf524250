//! Case-insensitive substring search over building name and type.

use crate::domain::Building;

/// Normalizes a raw query: surrounding whitespace trimmed, then lowercased.
///
/// # Examples
///
/// ```
/// use campusnav::catalog::normalize_query;
///
/// assert_eq!(normalize_query("  LIB "), "lib");
/// assert_eq!(normalize_query(" \t"), "");
/// ```
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns `true` if `normalized_query` occurs in the building's lowercased
/// name or type. An empty query matches everything.
#[must_use]
pub fn matches(building: &Building, normalized_query: &str) -> bool {
    normalized_query.is_empty()
        || building.name.to_lowercase().contains(normalized_query)
        || building.kind.to_lowercase().contains(normalized_query)
}

/// Derives the filtered view of `working_set` for `raw_query`.
///
/// An empty (or whitespace-only) query yields the whole working set. Matches
/// keep working-set order; no ranking is applied.
///
/// # Examples
///
/// ```
/// use campusnav::catalog::filter_buildings;
/// use campusnav::Building;
///
/// let working_set = vec![
///     Building::new("Main Library", "Library"),
///     Building::new("Annex", "Academic"),
/// ];
/// let filtered = filter_buildings(&working_set, "lib");
/// assert_eq!(filtered, vec![Building::new("Main Library", "Library")]);
/// ```
#[must_use]
pub fn filter_buildings(working_set: &[Building], raw_query: &str) -> Vec<Building> {
    let query = normalize_query(raw_query);

    let _span = tracing::debug_span!(
        "filter_buildings",
        total = working_set.len(),
        query = %query
    )
    .entered();

    if query.is_empty() {
        return working_set.to_vec();
    }

    let filtered: Vec<Building> = working_set
        .iter()
        .filter(|building| matches(building, &query))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "search filter applied");
    filtered
}
