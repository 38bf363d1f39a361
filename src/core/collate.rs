//! Locale-aware string ordering for sorted listings.
//!
//! Titles are compared on a transliterated, case-folded key first so that
//! accented and differently-cased titles interleave the way readers expect
//! ("Émile" next to "Emile", "apple" before "Banana"). Ties fall back to the
//! case-folded original and finally to raw bytes, which keeps the order total.

use deunicode::deunicode;
use std::cmp::Ordering;

/// Compare two strings the way a listing page should sort them.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Transliterated, lowercased sort key.
fn primary_key(s: &str) -> String {
    deunicode(s).to_lowercase()
}
