use async_trait::async_trait;
use httprecord_domain::DomainError;

/// A successfully fetched backend payload and the base TTL derived for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPayload {
    /// Raw response body text, one record per line.
    pub payload: String,
    /// Base TTL in seconds; caps any per-line TTL override.
    pub ttl: u32,
}

/// Fetches the payload answering one query from a backend endpoint.
///
/// Exactly one outbound request per call; implementations never retry.
/// `endpoint` is the configured URI template, with placeholder
/// substitution left to the implementation.
#[async_trait]
pub trait PayloadFetcher: Send + Sync {
    async fn fetch(&self, name: &str, endpoint: &str) -> Result<FetchedPayload, DomainError>;
}
