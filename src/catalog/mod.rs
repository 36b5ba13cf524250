//! Catalog layer: search filtering and type grouping.
//!
//! Both operations are total functions over the working set. They never
//! mutate their input and are re-run from scratch on every query change.
//!
//! ```text
//! Working Set → filter_buildings → Filtered View → group_buildings → Vec<BuildingGroup>
//! ```
//!
//! # Modules
//!
//! - [`search`]: query normalization and substring matching
//! - [`grouping`]: type partitioning and display ordering
//! - [`collate`]: locale-aware string comparison shared by both orderings

pub mod collate;
pub mod grouping;
pub mod search;

pub use grouping::{compare_types, group_buildings, type_priority, BuildingGroup, TYPE_ORDER};
pub use search::{filter_buildings, matches, normalize_query};
