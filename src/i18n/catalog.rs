//! Translation catalog loaded from `*.toml` / `*.json` files.
//!
//! Each file is one namespace named after its stem. Inside, tables nest by
//! dotted key segment and end in a table of language codes:
//!
//! ```toml
//! # i18n/authors.toml  ->  keys "authors.alice.title", "authors.alice.description"
//! [alice.title]
//! en = "Alice Example"
//! es = "Alicia Ejemplo"
//!
//! [alice.description]
//! en = "Writes about Rust."
//! ```
//!
//! Any non-empty table whose values are all strings is read as a language
//! table. A flat table such as `[tags] rust = "Rust"` therefore stores key
//! `<ns>.tags` with language `rust`; nest one level deeper to name keys.

use rustc_hash::FxHashMap;
use serde_json::Value as JsonValue;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use super::Translate;
use crate::debug;

/// Errors raised while loading catalog files.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("failed to parse `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("translation directory `{0}` does not exist")]
    MissingDir(PathBuf),
}

/// Translation file format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// In-memory translation table: dotted key -> language -> string.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    default_locale: String,
    entries: FxHashMap<String, FxHashMap<String, String>>,
}

impl Catalog {
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
            entries: FxHashMap::default(),
        }
    }

    /// Load every catalog file directly inside `dir`.
    ///
    /// Files are read in name order, so a key defined twice resolves to the
    /// last file's value.
    pub fn load_dir(dir: &Path, default_locale: &str) -> Result<Self, CatalogError> {
        if !dir.is_dir() {
            return Err(CatalogError::MissingDir(dir.to_path_buf()));
        }

        let mut files: Vec<(PathBuf, CatalogFormat)> = fs::read_dir(dir)
            .map_err(|err| CatalogError::Io(dir.to_path_buf(), err))?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter_map(|path| CatalogFormat::from_path(&path).map(|format| (path, format)))
            .collect();
        files.sort_by(|a, b| a.0.cmp(&b.0));

        let mut catalog = Self::new(default_locale);
        for (path, format) in files {
            let content =
                fs::read_to_string(&path).map_err(|err| CatalogError::Io(path.clone(), err))?;
            let namespace = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            catalog.merge_str(&namespace, &content, format, &path)?;
            debug!("i18n"; "loaded {}", path.display());
        }

        Ok(catalog)
    }

    /// Parse `content` and merge its entries under `namespace`.
    pub fn merge_str(
        &mut self,
        namespace: &str,
        content: &str,
        format: CatalogFormat,
        origin: &Path,
    ) -> Result<(), CatalogError> {
        let value: JsonValue = match format {
            CatalogFormat::Toml => {
                toml::from_str(content).map_err(|err| CatalogError::Toml(origin.into(), err))?
            }
            CatalogFormat::Json => serde_json::from_str(content)
                .map_err(|err| CatalogError::Json(origin.into(), err))?,
        };
        self.merge_value(namespace, &value);
        Ok(())
    }

    /// Walk nested tables down to their language leaves.
    fn merge_value(&mut self, path: &str, value: &JsonValue) {
        let JsonValue::Object(table) = value else {
            debug!("i18n"; "skipping non-table value at `{}`", path);
            return;
        };

        if is_language_table(table) {
            debug!("i18n"; "`{}`: {} languages", path, table.len());
            let langs = self.entries.entry(path.to_string()).or_default();
            for (lang, text) in table {
                if let Some(text) = text.as_str() {
                    langs.insert(lang.clone(), text.to_string());
                }
            }
            return;
        }

        for (segment, child) in table {
            let child_path = if path.is_empty() {
                segment.clone()
            } else {
                format!("{path}.{segment}")
            };
            self.merge_value(&child_path, child);
        }
    }

    /// Add or replace a single translation.
    pub fn insert(&mut self, key: impl Into<String>, lang: impl Into<String>, text: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .insert(lang.into(), text.into());
    }

    /// Exact lookup: no fallback.
    pub fn get(&self, key: &str, lang: &str) -> Option<&str> {
        self.entries.get(key)?.get(lang).map(String::as_str)
    }

    /// Lookup with fallback to the default locale.
    pub fn resolve(&self, key: &str, lang: &str) -> Option<&str> {
        self.get(key, lang)
            .or_else(|| self.get(key, &self.default_locale))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A non-empty table whose values are all strings.
fn is_language_table(table: &serde_json::Map<String, JsonValue>) -> bool {
    !table.is_empty() && table.values().all(JsonValue::is_string)
}

impl Translate for Catalog {
    /// Requested language, then default locale, then the key itself.
    fn translate(&self, key: &str, lang: &str) -> String {
        match self.resolve(key, lang) {
            Some(text) => text.to_string(),
            None => {
                debug!("i18n"; "no translation for `{}` ({})", key, lang);
                key.to_string()
            }
        }
    }
}
