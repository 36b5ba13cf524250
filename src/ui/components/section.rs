//! Type section component: a titled grid of cards.

use super::card::render_card;
use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::GroupView;
use std::fmt::Write as _;

/// Renders one type section.
///
/// # Layout
///
/// ```text
/// <div class="building-type-section">
///   <h4 class="building-type-title">TYPE (COUNT)</h4>
///   <div class="building-type-grid">
///     [cards]
///   </div>
/// </div>
/// ```
pub fn render_section(out: &mut String, group: &GroupView) {
    out.push_str("<div class=\"building-type-section\">\n");
    out.push_str("<h4 class=\"building-type-title\">");
    out.push_str(&escape_html(&group.kind));
    // Writing into a String cannot fail.
    let _ = writeln!(out, " ({})</h4>", group.count);
    out.push_str("<div class=\"building-type-grid\">\n");

    for card in &group.cards {
        render_card(out, card);
    }

    out.push_str("</div>\n</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::CardView;
    use crate::Building;

    #[test]
    fn section_title_shows_type_and_count() {
        let group = GroupView {
            kind: "Fitness / Gym".to_string(),
            count: 2,
            cards: vec![
                CardView::from_building(&Building::new("A", "Fitness / Gym")),
                CardView::from_building(&Building::new("B", "Fitness / Gym")),
            ],
        };
        let mut out = String::new();
        render_section(&mut out, &group);

        assert!(out.contains("<h4 class=\"building-type-title\">Fitness / Gym (2)</h4>"));
        assert_eq!(out.matches("class=\"building-card\"").count(), 2);
        assert!(out.find("data-building-id=\"A\"") < out.find("data-building-id=\"B\""));
    }
}
