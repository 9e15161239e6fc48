//! The resolution facility seam.
//!
//! The dispatcher only talks to DNS through [`RecordLookup`], so tests can
//! substitute a resolver that returns fixed records or synthetic errors.

use std::net::IpAddr;

use async_trait::async_trait;

use crate::dns::MxRecord;
use crate::error_handling::LookupError;

/// One lookup per supported record type.
///
/// Implementations must not retry or cache; each call is one resolution
/// attempt against the configured upstream.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Resolves the authoritative nameservers for `host`.
    async fn lookup_ns(&self, host: &str) -> Result<Vec<String>, LookupError>;

    /// Resolves the IPv4 and IPv6 addresses for `host`.
    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, LookupError>;

    /// Resolves the canonical name for `host`.
    ///
    /// Returns `host` itself (fully qualified) when it is not an alias.
    async fn lookup_cname(&self, host: &str) -> Result<String, LookupError>;

    /// Resolves the mail exchangers for `host`, in resolver order.
    async fn lookup_mx(&self, host: &str) -> Result<Vec<MxRecord>, LookupError>;

    /// Resolves the TXT records for `host`.
    async fn lookup_txt(&self, host: &str) -> Result<Vec<String>, LookupError>;
}
