//! Reusable hooks for virtual collections (authors, tags).
//!
//! ```text
//! Vec<Item> ──add_fields──▶ Vec<ExpandedItem> ─┬─ feed        ─▶ Vec<&ExpandedItem>
//!                                              ├─ index       ─▶ Vec<IndexPage>
//!                                              └─ individual  ─▶ Vec<IndividualPage>
//! ```
//!
//! Every hook borrows its input and returns freshly built values.

use serde::{Deserialize, Serialize};

use super::{
    Element, ExpandedData, ExpandedItem, Item, Paginated, Paginator, Selection, filter_by_lang,
};
use crate::core::{BuildMode, locale_compare};
use crate::i18n::Translate;
use crate::debug;

/// Context shared by every page of an index listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexContext {
    /// Number of items across all pages.
    pub total: usize,
}

/// Parent item carried by each of its individual pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemContext {
    pub key: String,
    pub title: String,
    pub description: String,
    pub data: ExpandedData,
}

impl From<&ExpandedItem> for ItemContext {
    fn from(item: &ExpandedItem) -> Self {
        Self {
            key: item.key.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            data: item.data.clone(),
        }
    }
}

pub type IndexPage = Paginated<ExpandedItem, IndexContext>;
pub type IndividualPage = Paginated<Element, ItemContext>;

/// Collection hooks bound to one build's mode, locale and collaborators.
pub struct Hooks<'a, T: Translate> {
    translator: &'a T,
    paginator: Paginator,
    mode: BuildMode,
    default_locale: &'a str,
}

impl<'a, T: Translate> Hooks<'a, T> {
    pub fn new(
        translator: &'a T,
        paginator: Paginator,
        mode: BuildMode,
        default_locale: &'a str,
    ) -> Self {
        Self {
            translator,
            paginator,
            mode,
            default_locale,
        }
    }

    /// Resolve `title` and `description` of each item under `path`.
    ///
    /// Keys are `<path>.<key>.title` and `<path>.<key>.description`. `lang`
    /// defaults to the site default locale. Output order matches input order.
    pub fn add_fields(&self, items: &[Item], path: &str, lang: Option<&str>) -> Vec<ExpandedItem> {
        let lang = lang.unwrap_or(self.default_locale);

        items
            .iter()
            .map(|item| {
                let title = self
                    .translator
                    .translate(&format!("{path}.{}.title", item.key), lang);
                let description = self
                    .translator
                    .translate(&format!("{path}.{}.description", item.key), lang);
                ExpandedItem::new(item, title, description)
            })
            .collect()
    }

    /// Items to syndicate: those with elements, and only in production.
    pub fn feed<'i>(&self, items: &'i [ExpandedItem]) -> Vec<&'i ExpandedItem> {
        if !self.mode.is_production() {
            debug!("feed"; "skipped in {} mode", self.mode);
            return Vec::new();
        }

        items.iter().filter(|item| item.has_elements()).collect()
    }

    /// Paginated index of items sorted by title.
    ///
    /// Test-capture runs list exactly `test_items`; other modes list the items
    /// that have elements.
    pub fn index(&self, items: &[ExpandedItem], href: &str, test_items: &[String]) -> Vec<IndexPage> {
        self.index_with(items, href, &Selection::for_mode(self.mode, test_items))
    }

    /// [`Hooks::index`] with an explicit selection rule.
    pub fn index_with(
        &self,
        items: &[ExpandedItem],
        href: &str,
        selection: &Selection<'_>,
    ) -> Vec<IndexPage> {
        let mut selected = selection.select(items);
        // Stable: equal titles keep input order
        selected.sort_by(|a, b| locale_compare(&a.title, &b.title));

        let context = IndexContext {
            total: selected.len(),
        };
        let selected: Vec<ExpandedItem> = selected.into_iter().cloned().collect();
        self.paginator.paginate(selected, &context, href)
    }

    /// Paginated listing of each item's elements in `lang`.
    ///
    /// Pages of all items are concatenated in input order. Items without
    /// elements in `lang` contribute no pages.
    pub fn individual(&self, items: &[ExpandedItem], lang: &str) -> Vec<IndividualPage> {
        items
            .iter()
            .filter(|item| item.has_elements())
            .flat_map(|item| {
                let elements: Vec<Element> =
                    filter_by_lang(&item.elements, lang, self.default_locale)
                        .into_iter()
                        .cloned()
                        .collect();
                self.paginator
                    .paginate(elements, &ItemContext::from(item), &item.href)
            })
            .collect()
    }
}
