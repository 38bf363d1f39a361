//! Language filtering of collection elements.

use super::Element;

/// Keep only the elements written in `lang`.
///
/// Elements without an explicit language count as `default_locale`.
pub fn filter_by_lang<'a>(
    elements: &'a [Element],
    lang: &str,
    default_locale: &str,
) -> Vec<&'a Element> {
    elements
        .iter()
        .filter(|element| element.lang(default_locale) == lang)
        .collect()
}
