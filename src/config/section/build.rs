//! `[build]` section configuration.
//!
//! ```toml
//! [build]
//! mode = "production"   # production | draft | test-capture
//! page_size = 24
//! i18n = "i18n"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::collection::DEFAULT_PAGE_SIZE;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::BuildMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Build mode. Unset means: ask the environment, then default to draft.
    pub mode: Option<BuildMode>,

    /// Elements per paginated page.
    pub page_size: usize,

    /// Directory of translation catalogs (relative to the config file).
    pub i18n: PathBuf,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            mode: None,
            page_size: DEFAULT_PAGE_SIZE,
            i18n: "i18n".into(),
        }
    }
}

impl BuildSectionConfig {
    pub const PAGE_SIZE: FieldPath = FieldPath::new("build.page_size");
    pub const I18N: FieldPath = FieldPath::new("build.i18n");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.page_size == 0 {
            diag.error_with_hint(
                Self::PAGE_SIZE,
                "page size must be at least 1",
                format!("remove {} to use the default ({DEFAULT_PAGE_SIZE})", Self::PAGE_SIZE),
            );
        }
        if self.i18n.as_os_str().is_empty() {
            diag.error(Self::I18N, "translation directory must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.mode, None);
        assert_eq!(config.build.page_size, 24);
        assert_eq!(config.build.i18n, PathBuf::from("i18n"));
    }

    #[test]
    fn test_mode_parsing() {
        for (input, expected) in [
            ("production", BuildMode::Production),
            ("draft", BuildMode::Draft),
            ("test-capture", BuildMode::TestCapture),
        ] {
            let config = test_parse_config(&format!("[build]\nmode = \"{input}\""));
            assert_eq!(config.build.mode, Some(expected), "mode failed for {input}");
        }
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = test_parse_config("[build]\npage_size = 0");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, BuildSectionConfig::PAGE_SIZE);
    }
}
