//! Wires configuration into the object graph served by the DNS handler.

use httprecord_application::{FallbackCachingFetcher, PayloadFetcher, ResolveQueryUseCase};
use httprecord_domain::{Config, Fall, OnError};
use httprecord_infrastructure::{DnsServerHandler, HttpFetcher};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::info;

pub fn build_handler(config: &Config) -> DnsServerHandler {
    let fetcher: Arc<dyn PayloadFetcher> = Arc::new(HttpFetcher::new(&config.http));

    let fetcher = match config.http.on_error {
        OnError::Cached => {
            // Capacity was validated as non-zero at config load.
            let capacity = NonZeroUsize::new(config.http.cache_capacity.max(1))
                .unwrap_or(NonZeroUsize::MIN);
            info!(capacity = capacity.get(), "fallback cache enabled");
            Arc::new(FallbackCachingFetcher::new(fetcher, capacity)) as Arc<dyn PayloadFetcher>
        }
        OnError::Servfail => fetcher,
    };

    let fall = match &config.fallthrough {
        Some(zones) => Fall::from_zones(zones.clone()),
        None => Fall::default(),
    };

    let resolver = ResolveQueryUseCase::new(
        config.records.clone(),
        config.zones.clone(),
        fetcher,
        fall,
    );

    DnsServerHandler::new(Arc::new(resolver))
}
