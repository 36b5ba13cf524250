//! Building card component.
//!
//! A card is the activation target for details and directions. Its
//! `data-building-id` attribute carries the building name, which is the
//! lookup key the interaction handler resolves against the working set.

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::CardView;

/// Renders one building card.
///
/// # Layout
///
/// ```text
/// <div class="building-card" tabindex="0" role="button" data-building-id="NAME" aria-label="View details for NAME">
///   <h4 class="building-name">NAME</h4>
///   <p class="building-description">DESCRIPTION</p>
///   <div class="building-info">
///     <span class="building-type">TYPE</span>
///     <span class="building-distance">DISTANCE</span>
///   </div>
///   <div class="building-coordinates"><small>📍 LAT, LNG</small></div>
/// </div>
/// ```
///
/// The coordinates block is omitted when the building has no coordinates.
pub fn render_card(out: &mut String, card: &CardView) {
    let name = escape_html(&card.name);

    out.push_str("<div class=\"building-card\" tabindex=\"0\" role=\"button\" data-building-id=\"");
    out.push_str(&name);
    out.push_str("\" aria-label=\"View details for ");
    out.push_str(&name);
    out.push_str("\">\n");

    push_element(out, "h4", "building-name", &name);
    push_element(out, "p", "building-description", &escape_html(&card.description));

    out.push_str("  <div class=\"building-info\">\n  ");
    push_element(out, "span", "building-type", &escape_html(&card.kind));
    out.push_str("  ");
    push_element(out, "span", "building-distance", &escape_html(&card.distance));
    out.push_str("  </div>\n");

    if let Some(coordinates) = &card.coordinates {
        out.push_str("  <div class=\"building-coordinates\"><small>📍 ");
        out.push_str(&escape_html(coordinates));
        out.push_str("</small></div>\n");
    }

    out.push_str("</div>\n");
}

// `content` must already be escaped.
fn push_element(out: &mut String, tag: &str, class: &str, content: &str) {
    out.push_str("  <");
    out.push_str(tag);
    out.push_str(" class=\"");
    out.push_str(class);
    out.push_str("\">");
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Building;

    fn rendered(building: &Building) -> String {
        let mut out = String::new();
        render_card(&mut out, &CardView::from_building(building));
        out
    }

    #[test]
    fn card_exposes_activation_attributes() {
        let out = rendered(&Building::new("Main Library", "Library"));
        assert!(out.contains("tabindex=\"0\""));
        assert!(out.contains("role=\"button\""));
        assert!(out.contains("data-building-id=\"Main Library\""));
        assert!(out.contains("aria-label=\"View details for Main Library\""));
        assert!(out.contains("<h4 class=\"building-name\">Main Library</h4>"));
        assert!(out.contains("<span class=\"building-type\">Library</span>"));
        assert!(out.contains("<div class=\"building-info\">"));
    }

    #[test]
    fn coordinates_block_only_when_known() {
        let with = rendered(&Building::new("Old Main", "Landmark").at(34.6881, -79.2));
        assert!(with.contains("<small>📍 34.6881, -79.2000</small>"));

        let without = rendered(&Building::new("Old Main", "Landmark"));
        assert!(!without.contains("building-coordinates"));
        assert!(without.contains("Distance unknown"));
    }

    #[test]
    fn script_name_renders_as_text() {
        let out = rendered(&Building::new("<script>", "Academic"));
        assert!(out.contains("<h4 class=\"building-name\">&lt;script&gt;</h4>"));
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn hostile_names_cannot_break_out_of_attributes() {
        let out = rendered(&Building::new("\" onfocus=\"alert(1)", "<img src=x>"));
        assert!(out.contains("data-building-id=\"&quot; onfocus=&quot;alert(1)\""));
        assert!(out.contains("&lt;img src=x&gt;"));
        assert!(!out.contains("<img"));
    }
}
