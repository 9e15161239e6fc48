//! System-backed implementation of [`RecordLookup`].

use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use crate::dns::records::{
    lookup_canonical_name, lookup_ip_addresses, lookup_mx_records, lookup_ns_records,
    lookup_txt_records,
};
use crate::dns::{MxRecord, RecordKind, RecordLookup};
use crate::error_handling::{to_lookup_error, LookupError};

/// Resolves records through a hickory resolver configured from the host
/// operating system.
///
/// Construct it with [`crate::initialization::init_resolver`].
#[derive(Clone)]
pub struct SystemResolver {
    inner: Arc<TokioAsyncResolver>,
}

impl SystemResolver {
    /// Wraps an already configured resolver.
    pub fn new(inner: Arc<TokioAsyncResolver>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RecordLookup for SystemResolver {
    async fn lookup_ns(&self, host: &str) -> Result<Vec<String>, LookupError> {
        log::debug!("Looking up NS records for {host}");
        lookup_ns_records(host, &self.inner)
            .await
            .map_err(|e| to_lookup_error(RecordKind::Ns, host, &e))
    }

    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, LookupError> {
        log::debug!("Looking up addresses for {host}");
        lookup_ip_addresses(host, &self.inner)
            .await
            .map_err(|e| to_lookup_error(RecordKind::Ip, host, &e))
    }

    async fn lookup_cname(&self, host: &str) -> Result<String, LookupError> {
        log::debug!("Looking up canonical name for {host}");
        lookup_canonical_name(host, &self.inner)
            .await
            .map_err(|e| to_lookup_error(RecordKind::Cname, host, &e))
    }

    async fn lookup_mx(&self, host: &str) -> Result<Vec<MxRecord>, LookupError> {
        log::debug!("Looking up MX records for {host}");
        lookup_mx_records(host, &self.inner)
            .await
            .map_err(|e| to_lookup_error(RecordKind::Mx, host, &e))
    }

    async fn lookup_txt(&self, host: &str) -> Result<Vec<String>, LookupError> {
        log::debug!("Looking up TXT records for {host}");
        lookup_txt_records(host, &self.inner)
            .await
            .map_err(|e| to_lookup_error(RecordKind::Txt, host, &e))
    }
}
