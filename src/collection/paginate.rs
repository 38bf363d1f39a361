//! Split a sequence into fixed-size pages bound to a URL.
//!
//! ```text
//! elements: [e0 .. e49], page_size: 24, href: "/tags/rust/"
//!
//! page 0  /tags/rust/      e0  .. e23
//! page 1  /tags/rust/2/    e24 .. e47
//! page 2  /tags/rust/3/    e48 .. e49
//! ```

use serde::{Deserialize, Serialize};

/// Elements per page when the config does not say otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 24;

/// One page of a paginated listing.
///
/// `context` is flattened into the page on serialization so templates read
/// e.g. `page.title` next to `page.elements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<E, C> {
    #[serde(flatten)]
    pub context: C,
    /// URL of this page.
    pub href: String,
    /// Zero-based page number.
    pub index: usize,
    /// Total number of pages in this listing.
    pub pages: usize,
    pub elements: Vec<E>,
}

/// Fixed-size paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// Create a paginator. A page size of zero is treated as one.
    pub const fn new(page_size: usize) -> Self {
        Self {
            page_size: if page_size == 0 { 1 } else { page_size },
        }
    }

    #[inline]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `len` elements.
    #[inline]
    pub const fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Chunk `elements` into pages, each carrying a copy of `context`.
    ///
    /// Empty input yields no pages.
    pub fn paginate<E, C: Clone>(
        &self,
        elements: Vec<E>,
        context: &C,
        href: &str,
    ) -> Vec<Paginated<E, C>> {
        let pages = self.page_count(elements.len());
        let mut remaining = elements.into_iter();

        (0..pages)
            .map(|index| Paginated {
                context: context.clone(),
                href: page_href(href, index),
                index,
                pages,
                elements: remaining.by_ref().take(self.page_size).collect(),
            })
            .collect()
    }
}

/// URL of page `index` under `base`: the base itself for the first page,
/// `<base>/<n>/` (1-based) for the rest.
pub fn page_href(base: &str, index: usize) -> String {
    if index == 0 {
        return base.to_string();
    }
    let base = base.trim_end_matches('/');
    format!("{base}/{}/", index + 1)
}
