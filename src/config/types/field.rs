//! Dotted key paths into `hooks.toml`.

use owo_colors::OwoColorize;
use std::fmt;

/// Key a diagnostic refers to. Each section declares its paths as consts:
///
/// ```ignore
/// pub const PAGE_SIZE: FieldPath = FieldPath::new("build.page_size");
/// diag.error(BuildSectionConfig::PAGE_SIZE, "must be at least 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}
