//! Command-line interface module.

mod args;
pub mod hooks;
pub mod io;

pub use args::{Cli, Commands, IoArgs};
