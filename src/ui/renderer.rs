//! Top-level rendering coordinator.
//!
//! The renderer turns a [`ResultsViewModel`] into markup in two shapes:
//!
//! 1. [`render_results`]: the inner markup of the results container, for a
//!    surface that already owns the page
//! 2. [`render_page`]: a standalone document with heading, container, and
//!    the theme's stylesheet
//!
//! Both are pure: the same view model always yields the same bytes.
//!
//! # Example
//!
//! ```rust
//! use campusnav::app::AppState;
//! use campusnav::ui::{render_page, Theme};
//! use campusnav::Building;
//!
//! let state = AppState::loaded(vec![Building::new("Main Library", "Library")]);
//! let html = render_page(&state.view_model(), &Theme::default());
//! assert!(html.contains("Campus Locations (1 total)"));
//! ```

use crate::ui::components;
use crate::ui::helpers::escape_html;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ResultsViewModel;

/// Document title of the standalone page.
const PAGE_TITLE: &str = "Campus Navigator";

/// Renders the results container's inner markup.
#[must_use]
pub fn render_results(vm: &ResultsViewModel) -> String {
    let mut out = String::with_capacity(4096);
    components::render_body(&mut out, &vm.body);
    out
}

/// Renders a complete HTML document for the view model.
///
/// # Layout
///
/// ```text
/// <!doctype html>
/// <head>  charset, viewport, <title>, <style>{theme}</style>
/// <body>
///   <h2 class="results-title">TITLE</h2>
///   <div id="results">[results]</div>
/// ```
#[must_use]
pub fn render_page(vm: &ResultsViewModel, theme: &Theme) -> String {
    let mut heading = String::new();
    components::render_title(&mut heading, &vm.title);

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{page_title}</title>
  <style>
{css}  </style>
</head>
<body>
<main>
{heading}<div id="results">
{results}</div>
</main>
</body>
</html>
"#,
        page_title = escape_html(PAGE_TITLE),
        css = theme.stylesheet(),
        results = render_results(vm),
    )
}
