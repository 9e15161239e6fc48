//! Error handling.
//!
//! This module provides:
//! - Error type definitions (lookup and initialization failures)
//! - Translation of resolver failures into user-facing messages

mod categorization;
mod types;

// Re-export public API
pub use categorization::{is_empty_answer, to_lookup_error};
pub use types::{InitializationError, LookupError};
