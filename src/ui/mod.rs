//! Rendering layer: view models to escaped HTML.
//!
//! # Architecture
//!
//! ```text
//! AppState → view_model → ResultsViewModel → render_results / render_page → HTML
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types and their computation
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable markup components
//! - [`helpers`]: Escaping and the distance placeholder
//! - [`theme`]: Color schemes and stylesheet generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use helpers::escape_html;
pub use renderer::{render_page, render_results};
pub use theme::Theme;
pub use viewmodel::{compute_viewmodel, CardView, GroupView, ResultsBody, ResultsViewModel};
