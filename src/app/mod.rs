//! Main application modules.
//!
//! This module provides the query model, result rendering, and the command
//! dispatcher used by the binary.

mod dispatch;
mod output;
mod query;

// Re-export public API
pub use dispatch::dispatch;
pub use output::{write_banner, Section};
pub use query::{Query, QueryKind};
