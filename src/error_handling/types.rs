//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

use crate::dns::RecordKind;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A failed record lookup.
///
/// There is a single failure kind: the resolver could not produce an answer.
/// `message` carries the resolver's description (host not found, timeout,
/// unreachable network, ...).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("lookup {host}: {message}")]
pub struct LookupError {
    /// Record type that was being looked up
    pub kind: RecordKind,
    /// Host the lookup was performed against
    pub host: String,
    /// Human-readable cause reported by the resolver
    pub message: String,
}

impl LookupError {
    /// Creates a lookup error for `host`.
    pub fn new(kind: RecordKind, host: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            host: host.into(),
            message: message.into(),
        }
    }
}
