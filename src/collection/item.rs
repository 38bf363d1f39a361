//! Collection item records: raw items, their elements, and expanded items.

use serde::{Deserialize, Serialize};

use super::JsonMap;

/// A raw virtual-collection entry (an author, a tag, ...).
///
/// Loaded as JSON from the data layer:
///
/// ```json
/// {
///   "key": "alice",
///   "href": "/authors/alice/",
///   "data": { "hero": "image/alice.jpg", "twitter": "alice" },
///   "elements": [{ "url": "/blog/hello/", "data": { "lang": "en" } }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub key: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub data: ItemData,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Item {
    pub fn has_elements(&self) -> bool {
        !self.elements.is_empty()
    }
}

/// Data bag of an [`Item`].
///
/// `date`, `hero` and `updated` are read by cards and feeds; anything else is
/// carried through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(flatten, default)]
    pub extra: JsonMap,
}

/// A sub-entry of an item, typically a post written by an author or tagged
/// with a tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub data: ElementData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    /// Language code of the element. Absent means the site default locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(flatten, default)]
    pub extra: JsonMap,
}

impl Element {
    /// Effective language, falling back to `default_locale`.
    pub fn lang<'a>(&'a self, default_locale: &'a str) -> &'a str {
        self.data.lang.as_deref().unwrap_or(default_locale)
    }
}

/// An [`Item`] with its localized title and description resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedItem {
    pub key: String,
    #[serde(default)]
    pub href: String,
    pub title: String,
    pub description: String,
    pub data: ExpandedData,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// Data bag of an [`ExpandedItem`]: the source [`ItemData`] plus the fields
/// cards and page headers read (`alt`, `subhead`, `title`, `description`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedData {
    pub alt: String,
    pub subhead: String,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub base: ItemData,
}

/// Keys of [`ExpandedData`] that shadow entries in the source data bag.
const RESOLVED_KEYS: [&str; 4] = ["alt", "subhead", "title", "description"];

impl ExpandedItem {
    /// Build an expanded item from its source and resolved strings.
    ///
    /// The source is borrowed and cloned; it is never modified.
    pub fn new(item: &Item, title: String, description: String) -> Self {
        // Resolved fields win over same-named keys in the source bag
        let mut base = item.data.clone();
        for key in RESOLVED_KEYS {
            base.extra.shift_remove(key);
        }

        Self {
            key: item.key.clone(),
            href: item.href.clone(),
            data: ExpandedData {
                alt: title.clone(),
                subhead: description.clone(),
                title: title.clone(),
                description: description.clone(),
                base,
            },
            title,
            description,
            elements: item.elements.clone(),
        }
    }

    pub fn has_elements(&self) -> bool {
        !self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserialize_minimal() {
        let item: Item = serde_json::from_str(r#"{"key": "rust"}"#).unwrap();
        assert_eq!(item.key, "rust");
        assert!(item.href.is_empty());
        assert!(!item.has_elements());
        assert!(item.data.extra.is_empty());
    }

    #[test]
    fn test_item_data_extra_fields() {
        let json = r#"{"key": "alice", "data": {"hero": "a.jpg", "twitter": "alice", "count": 3}}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.data.hero.as_deref(), Some("a.jpg"));
        assert_eq!(
            item.data.extra.get("twitter").and_then(|v| v.as_str()),
            Some("alice")
        );
        assert_eq!(item.data.extra.get("count").and_then(|v| v.as_i64()), Some(3));
    }

    #[test]
    fn test_element_lang_default() {
        let element = Element::default();
        assert_eq!(element.lang("en"), "en");

        let element: Element = serde_json::from_str(r#"{"data": {"lang": "es"}}"#).unwrap();
        assert_eq!(element.lang("en"), "es");
    }

    #[test]
    fn test_expanded_item_fields() {
        let item: Item = serde_json::from_str(
            r#"{"key": "a", "href": "/tags/a/", "data": {"date": "2020-01-01", "x": 1}}"#,
        )
        .unwrap();
        let expanded = ExpandedItem::new(&item, "Title".into(), "Desc".into());

        assert_eq!(expanded.title, "Title");
        assert_eq!(expanded.data.alt, "Title");
        assert_eq!(expanded.data.subhead, "Desc");
        assert_eq!(expanded.data.base.date.as_deref(), Some("2020-01-01"));
        assert_eq!(expanded.href, "/tags/a/");
    }

    #[test]
    fn test_expanded_data_serializes_flat() {
        let item: Item =
            serde_json::from_str(r#"{"key": "a", "data": {"hero": "h.png", "x": 1}}"#).unwrap();
        let expanded = ExpandedItem::new(&item, "T".into(), "D".into());
        let value = serde_json::to_value(&expanded.data).unwrap();

        assert_eq!(value["alt"], "T");
        assert_eq!(value["subhead"], "D");
        assert_eq!(value["hero"], "h.png");
        assert_eq!(value["x"], 1);
        assert!(value.get("base").is_none());
    }

    #[test]
    fn test_resolved_fields_shadow_source_keys() {
        let item: Item =
            serde_json::from_str(r#"{"key": "a", "data": {"title": "raw", "alt": "raw"}}"#)
                .unwrap();
        let expanded = ExpandedItem::new(&item, "T".into(), "D".into());
        let json = serde_json::to_string(&expanded.data).unwrap();

        assert_eq!(json.matches("\"title\"").count(), 1);
        assert!(!json.contains("raw"));
        // Source untouched
        assert_eq!(item.data.extra.get("title").and_then(|v| v.as_str()), Some("raw"));
    }
}
