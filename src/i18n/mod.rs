//! Localized string lookup.

mod catalog;

pub use catalog::{Catalog, CatalogError, CatalogFormat};

/// Resolves a dotted key (`authors.alice.title`) to text in a language.
///
/// Implementations own their fallback policy; a lookup never fails.
pub trait Translate {
    fn translate(&self, key: &str, lang: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str, &str) -> String,
{
    fn translate(&self, key: &str, lang: &str) -> String {
        self(key, lang)
    }
}
