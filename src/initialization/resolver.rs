//! DNS resolver initialization.
//!
//! This module builds the `hickory-resolver` instance used for TXT lookups,
//! with the configured timeout and without caching or retries.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Resolver options for SPF lookups.
///
/// Every lookup is a single fresh query: one attempt, no cache. `ndots` is 0
/// so names are tried as given before any search domain is appended.
pub fn resolver_options(base: ResolverOpts, timeout: Duration) -> ResolverOpts {
    let mut opts = base;
    opts.timeout = timeout;
    opts.attempts = 1;
    opts.cache_size = 0;
    opts.ndots = 0;
    opts
}

/// Initializes the DNS resolver for TXT lookups.
///
/// Uses the system configuration (`/etc/resolv.conf` on Unix) unless
/// nameservers are given in `config`, in which case each of them is queried
/// over UDP with TCP fallback. If the system configuration cannot be read,
/// hickory's default upstreams are used and a warning is logged.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if explicit nameservers
/// were requested but the list turned out empty after parsing.
pub fn init_resolver(config: &Config) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    let timeout = Duration::from_secs(config.dns_timeout_secs);

    let (resolver_config, base_opts) = if config.nameservers.is_empty() {
        match hickory_resolver::system_conf::read_system_conf() {
            Ok((resolver_config, opts)) => {
                log::debug!(
                    "Using system DNS configuration ({} nameservers)",
                    resolver_config.name_servers().len()
                );
                (resolver_config, opts)
            }
            Err(e) => {
                log::warn!("Failed to read system DNS configuration, using defaults: {e}");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        }
    } else {
        (
            explicit_config(&config.nameservers)?,
            ResolverOpts::default(),
        )
    };

    let opts = resolver_options(base_opts, timeout);
    log::debug!(
        "DNS resolver: timeout={}s attempts={} cache_size={}",
        opts.timeout.as_secs(),
        opts.attempts,
        opts.cache_size
    );

    Ok(Arc::new(TokioAsyncResolver::tokio(resolver_config, opts)))
}

fn explicit_config(nameservers: &[SocketAddr]) -> Result<ResolverConfig, InitializationError> {
    if nameservers.is_empty() {
        return Err(InitializationError::DnsResolverError(
            "no nameservers configured".to_string(),
        ));
    }
    let mut resolver_config = ResolverConfig::new();
    for addr in nameservers {
        resolver_config.add_name_server(NameServerConfig::new(*addr, Protocol::Udp));
        resolver_config.add_name_server(NameServerConfig::new(*addr, Protocol::Tcp));
    }
    Ok(resolver_config)
}
