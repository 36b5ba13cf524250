//! Notices shown in place of results.
//!
//! Two notices exist: the no-results notice for an empty filtered view, and
//! the error notice for a failed load. Both echo user- or system-supplied
//! text, so every interpolation goes through [`escape_html`].

use crate::ui::helpers::escape_html;

/// Renders the no-results notice.
///
/// # Parameters
///
/// * `out` - Markup buffer to append to
/// * `query` - Trimmed query as the user typed it
///
/// # Layout
///
/// ```text
/// <div class="no-results">
///   <h3>No results found</h3>
///   <p>No buildings match your search for "QUERY". Try searching for a different term.</p>
/// </div>
/// ```
pub fn render_no_results(out: &mut String, query: &str) {
    out.push_str("<div class=\"no-results\">\n");
    out.push_str("  <h3>No results found</h3>\n");
    out.push_str("  <p>No buildings match your search for \"");
    out.push_str(&escape_html(query));
    out.push_str("\". Try searching for a different term.</p>\n");
    out.push_str("</div>\n");
}

/// Renders the load-failure notice.
///
/// Shares the no-results container so both notices take the same styling.
pub fn render_error(out: &mut String, message: &str) {
    out.push_str("<div class=\"no-results\">\n");
    out.push_str("  <h3>Error</h3>\n");
    out.push_str("  <p>");
    out.push_str(&escape_html(message));
    out.push_str("</p>\n");
    out.push_str("</div>\n");
}
