//! Locale-aware string ordering for names and type labels.
//!
//! Approximates a root-locale collation without pulling in a full collator:
//!
//! 1. **Primary**: diacritics removed (NFD, combining marks dropped), case
//!    folded, and characters ranked punctuation/whitespace < digits < letters
//! 2. **Tertiary**: lowercase sorts before uppercase at the first difference
//! 3. **Identity**: raw code point order, so the result is a total order

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compares two strings the way a reader of a sorted directory expects.
///
/// # Examples
///
/// ```
/// use campusnav::catalog::collate;
/// use std::cmp::Ordering;
///
/// assert_eq!(collate::compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(collate::compare("École", "Eddy"), Ordering::Less);
/// assert_eq!(collate::compare("Hall", "Hall North"), Ordering::Less);
/// ```
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

fn base_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c))
}

fn primary_key(s: &str) -> Vec<(u8, char)> {
    base_chars(s)
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
        .collect()
}

fn case_key(s: &str) -> Vec<bool> {
    base_chars(s).map(char::is_uppercase).collect()
}

fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}
