//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use crate::dns::SystemResolver;

/// Initializes the DNS resolver for record lookups.
///
/// Reads the operating system's resolver configuration so lookups behave like
/// the platform resolver. If the system configuration cannot be read, the
/// hickory defaults (public upstream resolvers) are used instead and a warning
/// is logged.
///
/// Timeouts and attempts are taken from [`DNS_TIMEOUT_SECS`] and
/// [`DNS_ATTEMPTS`], and address lookups return both IPv4 and IPv6 results.
pub fn init_resolver() -> SystemResolver {
    let (config, opts) = match read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    let resolver = TokioAsyncResolver::tokio(config, tune(opts));
    SystemResolver::new(Arc::new(resolver))
}

fn tune(mut opts: ResolverOpts) -> ResolverOpts {
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    opts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tune_overrides_timeouts_and_strategy() {
        let opts = tune(ResolverOpts::default());
        assert_eq!(opts.timeout, Duration::from_secs(DNS_TIMEOUT_SECS));
        assert_eq!(opts.attempts, DNS_ATTEMPTS);
        assert_eq!(opts.ip_strategy, LookupIpStrategy::Ipv4AndIpv6);
    }

    #[tokio::test]
    async fn test_init_resolver_does_not_panic() {
        let _resolver = init_resolver();
    }
}
