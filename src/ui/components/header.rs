//! Results heading component.

use crate::ui::helpers::escape_html;

/// Renders the results heading.
///
/// # Output
///
/// ```text
/// <h2 class="results-title">Campus Locations (41 total)</h2>
/// ```
pub fn render_title(out: &mut String, title: &str) {
    out.push_str("<h2 class=\"results-title\">");
    out.push_str(&escape_html(title));
    out.push_str("</h2>\n");
}
