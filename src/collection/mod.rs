//! Virtual collections: items (authors, tags, ...) and the hooks that shape
//! them into feeds and paginated listings.
//!
//! | Module     | Purpose                                        |
//! |------------|------------------------------------------------|
//! | `item`     | `Item`, `Element`, `ExpandedItem` records      |
//! | `hooks`    | `add_fields`, `feed`, `index`, `individual`    |
//! | `select`   | Index selection rule (has-elements/allow-list) |
//! | `lang`     | Language filter for elements                   |
//! | `paginate` | Fixed-size pagination bound to a URL           |

mod hooks;
mod item;
mod lang;
mod paginate;
mod select;

pub use hooks::{Hooks, IndexContext, IndexPage, IndividualPage, ItemContext};
pub use item::{Element, ElementData, ExpandedData, ExpandedItem, Item, ItemData};
pub use lang::filter_by_lang;
pub use paginate::{DEFAULT_PAGE_SIZE, Paginated, Paginator, page_href};
pub use select::Selection;

/// JSON object used for open-ended data bags.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
