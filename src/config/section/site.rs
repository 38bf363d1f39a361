//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! default_locale = "en"
//! languages = ["en", "es", "ja"]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site-wide locale settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Locale used when no language is requested and for fallback lookups.
    pub default_locale: String,

    /// Locales the site is published in.
    pub languages: Vec<String>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            languages: vec!["en".into()],
        }
    }
}

impl SiteSectionConfig {
    pub const DEFAULT_LOCALE: FieldPath = FieldPath::new("site.default_locale");
    pub const LANGUAGES: FieldPath = FieldPath::new("site.languages");

    /// Validate locale settings.
    ///
    /// # Checks
    /// - `default_locale` is not empty
    /// - `default_locale` is one of `languages`
    /// - `languages` has no empty entries
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.default_locale.trim().is_empty() {
            diag.error_with_hint(
                Self::DEFAULT_LOCALE,
                "default locale must not be empty",
                format!("set {}, e.g.: \"en\"", Self::DEFAULT_LOCALE),
            );
        } else if !self.languages.contains(&self.default_locale) {
            diag.error_with_hint(
                Self::DEFAULT_LOCALE,
                format!(
                    "'{}' is not listed in {}",
                    self.default_locale,
                    Self::LANGUAGES
                ),
                format!("add \"{}\" to {}", self.default_locale, Self::LANGUAGES),
            );
        }

        if self.languages.iter().any(|lang| lang.trim().is_empty()) {
            diag.error(Self::LANGUAGES, "language codes must not be empty");
        }
    }

    /// Check whether `lang` is one of the site's languages.
    pub fn supports(&self, lang: &str) -> bool {
        self.languages.iter().any(|l| l == lang)
    }
}
