//! Shared rendering utilities.
//!
//! - **Markup escaping**: [`escape_html`] for every interpolated string
//! - **Distance placeholder**: [`placeholder_distance`], a deterministic
//!   stand-in until real distance computation exists

use crate::domain::Building;

/// Canned distances shown for buildings with coordinates.
const DISTANCE_PLACEHOLDERS: [&str; 5] = [
    "0.1 miles",
    "0.2 miles",
    "0.3 miles",
    "0.4 miles",
    "0.5 miles",
];

/// Shown when a building has no coordinates.
pub const DISTANCE_UNKNOWN: &str = "Distance unknown";

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Escapes markup-significant characters.
///
/// Safe for both element content and double- or single-quoted attribute
/// values.
///
/// # Examples
///
/// ```
/// use campusnav::ui::helpers::escape_html;
///
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_html("Papa John's & Co"), "Papa John&#x27;s &amp; Co");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Picks the placeholder distance for a building.
///
/// The pick is a pure function of the building name (FNV-1a hash), so a card
/// shows the same value on every render.
#[must_use]
pub fn placeholder_distance(building: &Building) -> &'static str {
    if building.coordinates.is_none() {
        return DISTANCE_UNKNOWN;
    }

    let hash = building
        .name
        .bytes()
        .fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        });

    #[allow(clippy::cast_possible_truncation)]
    let index = (hash % DISTANCE_PLACEHOLDERS.len() as u64) as usize;
    DISTANCE_PLACEHOLDERS[index]
}
