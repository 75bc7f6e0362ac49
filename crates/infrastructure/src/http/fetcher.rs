//! One bounded HTTP GET per lookup.

use async_trait::async_trait;
use fancy_regex::Regex;
use httprecord_application::ports::{FetchedPayload, PayloadFetcher};
use httprecord_domain::config::HttpConfig;
use httprecord_domain::{DomainError, FailureCode, FQDN_PLACEHOLDER};
use reqwest::header::{HeaderMap, CACHE_CONTROL};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, warn};

/// Hard ceiling on a fetched response body. Reading this many bytes means
/// the backend had more, and the fetch is treated as failed outright.
pub const MAX_HTTP_BODY_SIZE: usize = 4096;

/// TTL applied when neither the response headers nor the configuration
/// supply one.
const DEFAULT_TTL: u32 = 3600;

static MAX_AGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"max-age:\s*(\d+)").expect("static max-age pattern"));

pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
    max_ttl: u32,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Self {
        let timeout = config.effective_timeout();
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            timeout,
            max_ttl: config.max_ttl,
        }
    }

    /// Base TTL for a response, from its `Cache-Control` header.
    ///
    /// A header that is present but yields no usable `max-age:` value is a
    /// warning, never a failure; the configured cap or the default apply.
    fn derive_ttl(&self, headers: &HeaderMap) -> u32 {
        let cache_control = headers
            .get(CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        let candidate: u32 = MAX_AGE_RE
            .captures(cache_control)
            .ok()
            .flatten()
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);

        if !cache_control.is_empty() && candidate == 0 {
            warn!(header = %cache_control, "unable to parse Cache-Control header");
        }

        match candidate {
            ttl if ttl > 0 && (self.max_ttl == 0 || self.max_ttl > ttl) => ttl,
            _ if self.max_ttl > 0 => self.max_ttl,
            _ => DEFAULT_TTL,
        }
    }
}

#[async_trait]
impl PayloadFetcher for HttpFetcher {
    async fn fetch(&self, name: &str, endpoint: &str) -> Result<FetchedPayload, DomainError> {
        let uri = endpoint.replace(FQDN_PLACEHOLDER, name);

        debug!(uri = %uri, timeout = ?self.timeout, "fetching record payload");

        let mut response = self.client.get(&uri).send().await.map_err(|error| {
            if error.is_timeout() {
                DomainError::FetchTimeout {
                    endpoint: uri.clone(),
                    timeout: self.timeout,
                }
            } else {
                DomainError::Fetch(format!("request to {} failed: {}", uri, error))
            }
        })?;

        let ttl = self.derive_ttl(response.headers());
        let status = response.status().as_u16();

        // Bounded read: a broken backend could stream more than any reply
        // can carry, so everything past the ceiling is never pulled.
        let mut body = Vec::new();
        loop {
            let chunk = match response.chunk().await {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break,
                Err(error) if error.is_timeout() => {
                    return Err(DomainError::FetchTimeout {
                        endpoint: uri,
                        timeout: self.timeout,
                    })
                }
                Err(error) => {
                    return Err(DomainError::Fetch(format!(
                        "reading body from {} failed: {}",
                        uri, error
                    )))
                }
            };
            body.extend_from_slice(&chunk);
            if body.len() >= MAX_HTTP_BODY_SIZE {
                return Err(DomainError::BodyTooLong(MAX_HTTP_BODY_SIZE));
            }
        }

        match status {
            200 => Ok(FetchedPayload {
                payload: String::from_utf8_lossy(&body).into_owned(),
                ttl,
            }),
            404 => Err(DomainError::BackendIndicated {
                http_status: status,
                failure: FailureCode::NameError,
            }),
            status if status >= 500 => Err(DomainError::BackendIndicated {
                http_status: status,
                failure: FailureCode::ServerFailure,
            }),
            status => Err(DomainError::UnexpectedStatus(status)),
        }
    }
}
