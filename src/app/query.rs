//! The per-invocation query.

use clap::Subcommand;
use strum_macros::{Display as DisplayMacro, EnumIter as EnumIterMacro};

use crate::config::Config;

/// Operation selected on the command line.
///
/// Doc comments double as the subcommand help text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Subcommand, DisplayMacro, EnumIterMacro,
)]
#[strum(serialize_all = "lowercase")]
pub enum QueryKind {
    /// Version information
    Version,
    /// Gathers nameserver information about the specified host
    Ns,
    /// Gathers IP addresses about the specified host
    Ip,
    /// Gathers CNAME information about the specified host
    Cname,
    /// Gathers MX records from the specified host
    Mx,
    /// Gathers TXT records from the specified host
    Txt,
    /// Prints every command in a single output
    All,
}

/// A host paired with the operation to run against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Host to query; never empty when built from the CLI
    pub host: String,
    /// Operation to perform
    pub kind: QueryKind,
}

impl Query {
    /// Creates a query for `host`.
    pub fn new(host: impl Into<String>, kind: QueryKind) -> Self {
        Self {
            host: host.into(),
            kind,
        }
    }

    /// Creates a query against the configured host.
    pub fn from_config(config: &Config, kind: QueryKind) -> Self {
        Self::new(config.host.clone(), kind)
    }
}
