//! Configuration section definitions.
//!
//! Each module corresponds to a section in `hooks.toml`:
//!
//! | Module        | TOML Section    | Purpose                          |
//! |---------------|-----------------|----------------------------------|
//! | `build`       | `[build]`       | Mode, page size, catalog dir     |
//! | `collections` | `[collections]` | Test-capture allow-list          |
//! | `site`        | `[site]`        | Default locale, languages        |

mod build;
mod collections;
mod site;

pub use build::BuildSectionConfig;
pub use collections::CollectionsSectionConfig;
pub use site::SiteSectionConfig;
