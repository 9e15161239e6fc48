//! syndicate library: DNS record lookups for the command line
//!
//! This library resolves nameserver, address, CNAME, MX, and TXT records for a
//! host and renders them as plain text sections.
//!
//! # Example
//!
//! ```no_run
//! use syndicate::initialization::init_resolver;
//! use syndicate::{dispatch, Query, QueryKind};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let resolver = init_resolver();
//! let query = Query::new("example.com", QueryKind::Mx);
//! dispatch(&query, &resolver, &mut std::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async and need a Tokio runtime. A current-thread runtime is
//! enough since lookups never run concurrently.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod dns;
mod error_handling;
pub mod initialization;

// Re-export public API
pub use app::{dispatch, write_banner, Query, QueryKind, Section};
pub use config::{Cli, Config, LogFormat, LogLevel};
pub use dns::{MxRecord, RecordKind, RecordLookup, SystemResolver};
pub use error_handling::{InitializationError, LookupError};
