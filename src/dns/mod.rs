//! DNS resolution and record querying.
//!
//! This module provides async DNS operations using `hickory-resolver`:
//! - Nameserver queries (NS records)
//! - IP address resolution (A/AAAA records)
//! - Canonical name resolution (CNAME chains)
//! - Mail exchanger queries (MX records)
//! - Text record queries (TXT records)
//!
//! The dispatcher reaches these through the [`RecordLookup`] trait.

mod lookup;
mod records;
mod resolver;
mod types;

// Re-export public API
pub use lookup::RecordLookup;
pub use records::{
    lookup_canonical_name, lookup_ip_addresses, lookup_mx_records, lookup_ns_records,
    lookup_txt_records,
};
pub use resolver::SystemResolver;
pub use types::{MxRecord, RecordKind};
