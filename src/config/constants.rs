//! Configuration constants.
//!
//! Program identity, output formatting, and resolver tuning values used
//! throughout the application.

/// Program name as shown in help output.
pub const APP_NAME: &str = "syndicate";

/// One-line description shown in help output.
pub const APP_USAGE: &str = "Network CLI tool for gathering information across multiple areas";

/// Display name used in the version banner.
pub const DISPLAY_NAME: &str = "Syndicate";

/// Version string printed by the `version` subcommand and the `all` banner.
pub const VERSION: &str = "v0.1.4";

/// Author line printed alongside the version.
pub const AUTHOR: &str = "Hifumi1337 (https://github.com/Hifumi1337)";

/// Host queried when `--host` is not given.
pub const DEFAULT_HOST: &str = "google.com";

/// Line printed above and below each result section (30 `=` characters).
pub const SEPARATOR: &str = "==============================";

/// Prefix for single-value result lines.
pub const ITEM_PREFIX: &str = "[*]";

// Resolver tuning
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Attempts per query before the resolver gives up
pub const DNS_ATTEMPTS: usize = 2;
/// Upper bound on CNAME aliases followed when resolving a canonical name
pub const MAX_CNAME_HOPS: usize = 8;
