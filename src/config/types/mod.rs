//! Configuration utility types.
//!
//! | Module  | Purpose                          |
//! |---------|----------------------------------|
//! | `error` | `ConfigError`, diagnostics       |
//! | `field` | Dotted field path for messages   |

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
