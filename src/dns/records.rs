//! DNS record queries (NS, A/AAAA, CNAME, MX, TXT).
//!
//! Thin wrappers over `hickory-resolver` that pull the record data out of a
//! lookup. Failures are returned unchanged so the caller decides how to
//! describe them.

use std::future::Future;
use std::net::IpAddr;

use hickory_resolver::error::ResolveError;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::config::MAX_CNAME_HOPS;
use crate::dns::MxRecord;
use crate::error_handling::is_empty_answer;

/// Queries NS (nameserver) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// Nameserver hostnames, fully qualified, in the order received.
pub async fn lookup_ns_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, ResolveError> {
    let lookup = resolver.lookup(domain, RecordType::NS).await?;
    Ok(lookup
        .iter()
        .filter_map(|rdata| {
            if let RData::NS(ns) = rdata {
                Some(ns.to_utf8())
            } else {
                None
            }
        })
        .collect())
}

/// Resolves all IPv4 and IPv6 addresses for a host.
///
/// Which families are returned depends on the resolver's `ip_strategy`.
pub async fn lookup_ip_addresses(
    host: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<IpAddr>, ResolveError> {
    let response = resolver.lookup_ip(host).await?;
    Ok(response.iter().collect())
}

/// Resolves the canonical name of a host by following its CNAME chain.
///
/// Stops after [`MAX_CNAME_HOPS`] aliases. A host that is not an alias is
/// its own canonical name. Only a failure on the first hop is an error; a
/// broken link further down the chain ends the walk at the last good name.
pub async fn lookup_canonical_name(
    host: &str,
    resolver: &TokioAsyncResolver,
) -> Result<String, ResolveError> {
    follow_cname_chain(host, move |name| async move {
        let lookup = resolver.lookup(name.as_str(), RecordType::CNAME).await?;
        Ok::<_, ResolveError>(lookup.iter().find_map(|rdata| {
            if let RData::CNAME(cname) = rdata {
                Some(cname.to_utf8())
            } else {
                None
            }
        }))
    })
    .await
}

/// Walks a CNAME chain starting at `host`.
///
/// `resolve_hop` returns the alias target of one name, or `None` when the
/// answer carried no CNAME.
pub(crate) async fn follow_cname_chain<F, Fut>(
    host: &str,
    mut resolve_hop: F,
) -> Result<String, ResolveError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Option<String>, ResolveError>>,
{
    let mut current = fully_qualified(host);

    for hop in 0..MAX_CNAME_HOPS {
        match resolve_hop(current.clone()).await {
            Ok(Some(target)) if target != current => current = target,
            Ok(_) => break,
            Err(e) if is_empty_answer(&e) => break,
            Err(e) if hop == 0 => return Err(e),
            Err(e) => {
                log::debug!("CNAME chain for {host} stopped at {current}: {e}");
                break;
            }
        }
    }

    Ok(current)
}

/// Queries MX (mail exchanger) records for a domain.
///
/// # Returns
///
/// Mail exchangers in the order the resolver returned them. No sorting by
/// preference is applied.
pub async fn lookup_mx_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<MxRecord>, ResolveError> {
    let lookup = resolver.lookup(domain, RecordType::MX).await?;
    Ok(lookup
        .iter()
        .filter_map(|rdata| {
            if let RData::MX(mx) = rdata {
                Some(MxRecord::new(mx.exchange().to_utf8(), mx.preference()))
            } else {
                None
            }
        })
        .collect())
}

/// Queries TXT (text) records for a domain.
///
/// A TXT record may hold several character-strings; they are joined into
/// one value per record.
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, ResolveError> {
    let lookup = resolver.lookup(domain, RecordType::TXT).await?;
    Ok(lookup
        .iter()
        .filter_map(|rdata| {
            if let RData::TXT(txt) = rdata {
                Some(
                    txt.iter()
                        .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                        .collect::<Vec<String>>()
                        .join(""),
                )
            } else {
                None
            }
        })
        .collect())
}

/// Appends the root label to `host` unless it is already present.
pub(crate) fn fully_qualified(host: &str) -> String {
    if host.ends_with('.') {
        host.to_string()
    } else {
        format!("{host}.")
    }
}
