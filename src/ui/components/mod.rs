//! Composable markup component renderers.
//!
//! Each component appends the markup for one part of the results view to a
//! shared buffer. Components escape every string they interpolate; callers
//! pass raw view model text.
//!
//! # Components
//!
//! - [`header`]: Results heading
//! - [`section`]: Type section with its card grid
//! - [`card`]: Single building card
//! - [`empty`]: No-results and load-failure notices
//!
//! # Layout
//!
//! [`render_body`] lays out the results container:
//!
//! ```text
//! Groups    → [Section]*  (each: title, grid of cards)
//! NoResults → [No-results notice]
//! Error     → [Error notice]
//! ```

mod card;
mod empty;
mod header;
mod section;

pub use card::render_card;
pub use empty::{render_error, render_no_results};
pub use header::render_title;
pub use section::render_section;

use crate::ui::viewmodel::ResultsBody;

/// Renders the inner markup of the results container.
pub fn render_body(out: &mut String, body: &ResultsBody) {
    match body {
        ResultsBody::Groups(groups) => {
            for group in groups {
                render_section(out, group);
            }
        }
        ResultsBody::NoResults { query } => render_no_results(out, query),
        ResultsBody::Error { message } => render_error(out, message),
    }
}
