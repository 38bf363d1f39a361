//! Site configuration management for `hooks.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site], [build], [collections]
//! ├── types/         # ConfigError, diagnostics, FieldPath
//! ├── util.rs        # config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The file is optional: without one every section takes its defaults.

pub mod section;
pub mod types;
mod util;

pub use section::{BuildSectionConfig, CollectionsSectionConfig, SiteSectionConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use crate::core::BuildMode;
use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing hooks.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory holding the config file, or the cwd when running on defaults
    #[serde(skip)]
    pub root: PathBuf,

    /// Locale settings
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Build mode, pagination and catalog location
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Collection settings
    #[serde(default)]
    pub collections: CollectionsSectionConfig,
}

impl SiteConfig {
    /// Locate and load `config_name`, searching upward from the cwd.
    ///
    /// A missing file is not an error: defaults are used and the cwd becomes
    /// the project root.
    pub fn load(config_name: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cwd, config_name) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config
            }
            None => {
                crate::debug!("config"; "{} not found, using defaults", config_name.display());
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.build.validate(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Build mode from the CLI flag, this file, or the environment.
    pub fn build_mode(&self, cli: Option<BuildMode>) -> BuildMode {
        BuildMode::resolve(cli, self.build.mode)
    }

    /// Resolve a config-relative path against the project root.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }
}

/// Parse a config snippet for tests, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
