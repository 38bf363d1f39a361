//! `[collections]` section configuration.
//!
//! ```toml
//! [collections]
//! test_items = ["alice", "bob"]
//! ```

use serde::{Deserialize, Serialize};

/// Collection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionsSectionConfig {
    /// Item keys listed on index pages during test-capture runs.
    pub test_items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        assert!(test_parse_config("").collections.test_items.is_empty());
    }

    #[test]
    fn test_items() {
        let config = test_parse_config("[collections]\ntest_items = [\"alice\", \"bob\"]");
        assert_eq!(config.collections.test_items, vec!["alice", "bob"]);
    }
}
