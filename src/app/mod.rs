//! Application layer: state, events, and actions.
//!
//! This module sits between a presentation surface (the binary's one-shot and
//! interactive modes, or any other host) and the catalog/UI layers. Surface
//! input arrives as events; the handler mutates [`AppState`] and answers with
//! a re-render flag and a list of side effects.
//!
//! # Architecture
//!
//! ```text
//! Surface Input → Event → handle_event → AppState mutation → (render?, Actions)
//!                                                                   ↓
//!                                         Surface executes actions, re-renders view_model()
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands and the details payload
//! - [`handler`]: Event dispatch table
//! - [`phase`]: Session phase and key types
//! - [`state`]: Session state container and view model derivation

pub mod actions;
pub mod handler;
pub mod phase;
pub mod state;

pub use actions::{Action, BuildingDetails};
pub use handler::{handle_event, Event};
pub use phase::{Key, Phase};
pub use state::AppState;
