//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (program identity, separators, resolver timeouts)
//! - CLI option types and parsing
//! - The immutable `Config` handed to every subcommand

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Config, LogFormat, LogLevel};
