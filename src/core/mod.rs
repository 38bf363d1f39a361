//! Core types - pure abstractions shared across the codebase.

mod collate;
mod driver;

pub use collate::locale_compare;
pub use driver::{BuildMode, ENV_MODE_VAR, ENV_TEST_CAPTURE_VAR};
