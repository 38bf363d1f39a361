//! Build mode configuration for production/draft/test-capture builds.

use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;

/// Environment variable naming the deployment environment (`prod` = production).
pub const ENV_MODE_VAR: &str = "ELEVENTY_ENV";

/// Environment variable set by visual-snapshot test runs.
pub const ENV_TEST_CAPTURE_VAR: &str = "PERCY";

/// Build mode passed explicitly into the collection hooks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BuildMode {
    /// Live-publish build: feeds are emitted.
    Production,
    /// Local or staging build (default).
    #[default]
    Draft,
    /// Snapshot test run: index pages use a fixed allow-list of items.
    TestCapture,
}

impl BuildMode {
    /// Check if this is a production build.
    #[inline]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a snapshot test run.
    #[inline]
    pub const fn is_test_capture(&self) -> bool {
        matches!(self, Self::TestCapture)
    }

    /// Derive the mode from environment variables.
    ///
    /// A non-empty `PERCY` wins over `ELEVENTY_ENV=prod`. Returns `None` when
    /// neither applies so callers can fall through to their own default.
    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var(ENV_MODE_VAR).ok().as_deref(),
            is_set(std::env::var_os(ENV_TEST_CAPTURE_VAR).as_deref()),
        )
    }

    fn from_vars(env: Option<&str>, test_capture: bool) -> Option<Self> {
        if test_capture {
            return Some(Self::TestCapture);
        }
        match env {
            Some("prod") => Some(Self::Production),
            Some(_) => Some(Self::Draft),
            None => None,
        }
    }

    /// Pick the first mode that is set: CLI flag, config file, environment.
    pub fn resolve(cli: Option<Self>, config: Option<Self>) -> Self {
        Self::resolve_with(cli, config, Self::from_env)
    }

    fn resolve_with(
        cli: Option<Self>,
        config: Option<Self>,
        env: impl FnOnce() -> Option<Self>,
    ) -> Self {
        cli.or(config).or_else(env).unwrap_or_default()
    }
}

/// An empty variable counts as unset.
fn is_set(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Production => "production",
            Self::Draft => "draft",
            Self::TestCapture => "test-capture",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_draft() {
        assert_eq!(BuildMode::default(), BuildMode::Draft);
        assert!(!BuildMode::Draft.is_production());
    }

    #[test]
    fn test_from_vars() {
        assert_eq!(BuildMode::from_vars(Some("prod"), false), Some(BuildMode::Production));
        assert_eq!(BuildMode::from_vars(Some("dev"), false), Some(BuildMode::Draft));
        assert_eq!(BuildMode::from_vars(Some("prod"), true), Some(BuildMode::TestCapture));
        assert_eq!(BuildMode::from_vars(None, false), None);
    }

    #[test]
    fn test_empty_test_capture_var_is_unset() {
        assert!(!is_set(None));
        assert!(!is_set(Some(OsStr::new(""))));
        assert!(is_set(Some(OsStr::new("1"))));
        assert_eq!(
            BuildMode::from_vars(Some("prod"), is_set(Some(OsStr::new("")))),
            Some(BuildMode::Production)
        );
    }

    #[test]
    fn test_resolve_falls_back_to_env() {
        let from_prod = || BuildMode::from_vars(Some("prod"), false);
        assert_eq!(BuildMode::resolve_with(None, None, from_prod), BuildMode::Production);
        assert_eq!(
            BuildMode::resolve_with(None, Some(BuildMode::Draft), from_prod),
            BuildMode::Draft
        );
        assert_eq!(BuildMode::resolve_with(None, None, || None), BuildMode::Draft);
    }

    #[test]
    fn test_resolve_prefers_cli_then_config() {
        let mode = BuildMode::resolve(Some(BuildMode::TestCapture), Some(BuildMode::Production));
        assert_eq!(mode, BuildMode::TestCapture);
        let mode = BuildMode::resolve(None, Some(BuildMode::Production));
        assert_eq!(mode, BuildMode::Production);
    }

    #[test]
    fn test_test_capture_is_not_production() {
        assert!(BuildMode::TestCapture.is_test_capture());
        assert!(!BuildMode::TestCapture.is_production());
    }

    #[test]
    fn test_deserialize_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: BuildMode,
        }
        let w: Wrapper = toml::from_str("mode = \"test-capture\"").unwrap();
        assert_eq!(w.mode, BuildMode::TestCapture);
        assert_eq!(BuildMode::TestCapture.to_string(), "test-capture");
    }
}
