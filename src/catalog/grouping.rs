//! Partitioning of the filtered view into ordered type groups.
//!
//! # Ordering
//!
//! - Groups whose type appears in [`TYPE_ORDER`] come first, by list index
//! - Unlisted types follow, ordered alphabetically
//! - Inside a group, buildings are ordered alphabetically by name
//!
//! Alphabetical order uses [`collate::compare`]. Groups are collected through
//! a `BTreeMap` and sorted with a stable sort, so the same input always yields
//! the same output.

use super::collate;
use crate::domain::Building;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Curated display order of known building types.
pub const TYPE_ORDER: &[&str] = &[
    "Dining",
    "Student Life",
    "Student Services",
    "Historic / Student Services",
    "Residence Hall",
    "Apartments",
    "Academic",
    "Administration",
    "Library",
    "Fitness / Gym",
    "Aquatics / Fitness",
    "Athletics",
    "Recreation",
    "Performing Arts / Auditorium",
    "Landmark",
];

/// All buildings of one type, sorted by name.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingGroup {
    /// Exact type string shared by every building in the group.
    pub kind: String,
    /// Buildings of this type in display order.
    pub buildings: Vec<Building>,
}

/// Position of `kind` in [`TYPE_ORDER`], if listed.
#[must_use]
pub fn type_priority(kind: &str) -> Option<usize> {
    TYPE_ORDER.iter().position(|listed| *listed == kind)
}

/// Orders two type labels for display.
///
/// # Examples
///
/// ```
/// use campusnav::catalog::compare_types;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_types("Dining", "Library"), Ordering::Less);
/// assert_eq!(compare_types("Aaa-Unlisted", "Landmark"), Ordering::Greater);
/// assert_eq!(compare_types("Aaa-Unlisted", "Zzz-Unlisted"), Ordering::Less);
/// ```
#[must_use]
pub fn compare_types(a: &str, b: &str) -> Ordering {
    match (type_priority(a), type_priority(b)) {
        (Some(pa), Some(pb)) => pa.cmp(&pb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => collate::compare(a, b),
    }
}

/// Groups the filtered view by exact type and orders groups and members.
///
/// # Examples
///
/// ```
/// use campusnav::catalog::group_buildings;
/// use campusnav::Building;
///
/// let groups = group_buildings(&[
///     Building::new("Ziggurat Hall", "Academic"),
///     Building::new("Apex Center", "Academic"),
///     Building::new("Starbucks", "Dining"),
/// ]);
/// assert_eq!(groups[0].kind, "Dining");
/// assert_eq!(groups[1].buildings[0].name, "Apex Center");
/// ```
#[must_use]
pub fn group_buildings(filtered: &[Building]) -> Vec<BuildingGroup> {
    let _span = tracing::debug_span!("group_buildings", total = filtered.len()).entered();

    let mut by_kind: BTreeMap<&str, Vec<Building>> = BTreeMap::new();
    for building in filtered {
        by_kind
            .entry(building.kind.as_str())
            .or_default()
            .push(building.clone());
    }

    let mut groups: Vec<BuildingGroup> = by_kind
        .into_iter()
        .map(|(kind, mut buildings)| {
            buildings.sort_by(|a, b| collate::compare(&a.name, &b.name));
            BuildingGroup {
                kind: kind.to_string(),
                buildings,
            }
        })
        .collect();

    groups.sort_by(|a, b| compare_types(&a.kind, &b.kind));

    tracing::debug!(group_count = groups.len(), "buildings grouped");
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(groups: &[BuildingGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.kind.as_str()).collect()
    }

    #[test]
    fn listed_types_precede_unlisted_types() {
        let filtered = [
            Building::new("a", "Dining"),
            Building::new("b", "Library"),
            Building::new("c", "Zzz-Unlisted"),
            Building::new("d", "Aaa-Unlisted"),
        ];
        assert_eq!(
            kinds(&group_buildings(&filtered)),
            ["Dining", "Library", "Aaa-Unlisted", "Zzz-Unlisted"]
        );
    }

    #[test]
    fn buildings_inside_a_group_sort_by_name() {
        let filtered = [
            Building::new("Ziggurat Hall", "Academic"),
            Building::new("Apex Center", "Academic"),
        ];
        let groups = group_buildings(&filtered);
        let names: Vec<_> = groups[0].buildings.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Apex Center", "Ziggurat Hall"]);
    }

    #[test]
    fn every_listed_type_keeps_priority_order() {
        let filtered: Vec<Building> = TYPE_ORDER
            .iter()
            .rev()
            .map(|kind| Building::new(format!("{kind} building"), *kind))
            .collect();
        assert_eq!(kinds(&group_buildings(&filtered)), TYPE_ORDER);
    }

    #[test]
    fn grouping_is_exact_on_type_strings() {
        let filtered = [
            Building::new("Old Main", "Historic / Student Services"),
            Building::new("Brave Health Center", "Student Services"),
        ];
        let groups = group_buildings(&filtered);
        assert_eq!(groups.len(), 2);
        assert_eq!(kinds(&groups), ["Student Services", "Historic / Student Services"]);
    }

    #[test]
    fn grouping_is_idempotent() {
        let filtered = [
            Building::new("Pine Residence Hall", "Residence Hall"),
            Building::new("Belk Residence Hall", "Residence Hall"),
            Building::new("Storage Shed", "Utility"),
            Building::new("Caton Fieldhouse", "Athletics"),
            Building::new("Annex", "Utility"),
        ];
        assert_eq!(group_buildings(&filtered), group_buildings(&filtered));
    }

    #[test]
    fn group_counts_cover_the_filtered_view() {
        let filtered = [
            Building::new("A", "Dining"),
            Building::new("B", "Dining"),
            Building::new("C", "Academic"),
        ];
        let total: usize = group_buildings(&filtered).iter().map(|g| g.buildings.len()).sum();
        assert_eq!(total, filtered.len());
    }

    #[test]
    fn empty_view_has_no_groups() {
        assert!(group_buildings(&[]).is_empty());
    }
}
