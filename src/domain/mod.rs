//! Domain layer for campusnav.
//!
//! Core types independent of the network, terminal, or markup concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`building`]: Building model, description table and directions link
//!
//! # Examples
//!
//! ```
//! use campusnav::domain::{Building, Result};
//!
//! fn sample() -> Result<Building> {
//!     Ok(Building::new("Lumbee Hall", "Administration").at(34.6886, -79.2010))
//! }
//! # assert!(sample().is_ok());
//! ```

pub mod building;
pub mod error;

pub use building::{Building, Coordinates, GENERIC_DESCRIPTION};
pub use error::{LoadError, NavigateError, Result};
