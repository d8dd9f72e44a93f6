//! Section titles derived from directory names.

use std::sync::LazyLock;

use regex::Regex;

/// Ordering prefixes such as `02-` (possibly repeated: `02-01-`).
static ORDER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]+-)+").expect("invalid order prefix regex"));

/// Turn a section directory name into a display title.
///
/// Leading `digits-` ordering prefixes are removed, dashes become spaces and
/// the first character of every whitespace-delimited word is upper-cased.
///
/// ```
/// use lectern_site::section_title;
///
/// assert_eq!(section_title("02-smart-contracts"), "Smart Contracts");
/// ```
#[must_use]
pub fn section_title(sub_dir: &str) -> String {
    let unprefixed = ORDER_PREFIX.replace(sub_dir, "");
    capitalize_words(&unprefixed.replace('-', " "))
}

fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && !c.is_whitespace() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    result
}
