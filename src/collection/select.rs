//! Which items make it onto index pages.

use rustc_hash::FxHashSet;

use super::ExpandedItem;
use crate::core::BuildMode;

/// Index selection rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    /// Items that have at least one element (normal builds).
    WithElements,
    /// Items whose key is listed, with or without elements (snapshot runs
    /// need a fixed, reproducible set).
    AllowList(&'a [String]),
}

impl<'a> Selection<'a> {
    /// Rule implied by the build mode: the allow-list only applies to
    /// test-capture runs.
    pub fn for_mode(mode: BuildMode, test_items: &'a [String]) -> Self {
        if mode.is_test_capture() {
            Self::AllowList(test_items)
        } else {
            Self::WithElements
        }
    }

    /// Apply the rule, preserving input order.
    pub fn select<'i>(&self, items: &'i [ExpandedItem]) -> Vec<&'i ExpandedItem> {
        match self {
            Self::WithElements => items.iter().filter(|item| item.has_elements()).collect(),
            Self::AllowList(keys) => {
                let keys: FxHashSet<&str> = keys.iter().map(String::as_str).collect();
                items
                    .iter()
                    .filter(|item| keys.contains(item.key.as_str()))
                    .collect()
            }
        }
    }
}
