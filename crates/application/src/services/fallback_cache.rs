//! Last-known-good fallback around a [`PayloadFetcher`].
//!
//! Consulted only when the wrapped fetch fails: a previously successful
//! payload for the same (name, endpoint) pair is served as if it were a
//! fresh success, so callers cannot tell stale-but-cached from fresh.

use crate::ports::{FetchedPayload, PayloadFetcher};
use async_trait::async_trait;
use httprecord_domain::DomainError;
use lru::LruCache;
use rustc_hash::{FxBuildHasher, FxHasher};
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

pub struct FallbackCachingFetcher {
    inner: Arc<dyn PayloadFetcher>,
    cache: Mutex<LruCache<u64, FetchedPayload, FxBuildHasher>>,
}

impl FallbackCachingFetcher {
    pub fn new(inner: Arc<dyn PayloadFetcher>, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            cache: Mutex::new(LruCache::with_hasher(capacity, FxBuildHasher)),
        }
    }

    fn cache_key(name: &str, endpoint: &str) -> u64 {
        let mut hasher = FxHasher::default();
        name.hash(&mut hasher);
        endpoint.hash(&mut hasher);
        hasher.finish()
    }
}

#[async_trait]
impl PayloadFetcher for FallbackCachingFetcher {
    async fn fetch(&self, name: &str, endpoint: &str) -> Result<FetchedPayload, DomainError> {
        let key = Self::cache_key(name, endpoint);

        match self.inner.fetch(name, endpoint).await {
            Ok(fetched) => {
                self.cache
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .put(key, fetched.clone());
                Ok(fetched)
            }
            Err(error) => {
                let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
                match cache.get(&key) {
                    Some(entry) => {
                        debug!(
                            name = %name,
                            error = %error,
                            "serving last known good payload after fetch failure"
                        );
                        Ok(entry.clone())
                    }
                    None => Err(error),
                }
            }
        }
    }
}
