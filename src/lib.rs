//! Localized, paginated virtual collections for static site builds.
//!
//! Turns raw collection items (authors, tags, ...) into:
//!
//! - **expanded items** with localized `title` / `description`,
//! - a **feed** selection (production builds only),
//! - **index pages**: items sorted by title, paginated,
//! - **individual pages**: each item's elements in one language, paginated.
//!
//! ```ignore
//! let catalog = Catalog::load_dir(Path::new("i18n"), "en")?;
//! let hooks = Hooks::new(&catalog, Paginator::default(), BuildMode::Production, "en");
//!
//! let tags = hooks.add_fields(&raw_tags, "tags", None);
//! let pages = hooks.index(&tags, "/tags/", &[]);
//! ```

pub mod cli;
pub mod collection;
pub mod config;
pub mod core;
pub mod i18n;
pub mod logger;

pub use collection::{ExpandedItem, Hooks, Item, Paginated, Paginator, Selection};
pub use core::BuildMode;
pub use i18n::{Catalog, Translate};
