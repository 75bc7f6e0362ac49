use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timeout applied when the configured one is unset or zero. A zero
/// timeout is deliberately not treated as infinite, to keep upstream
/// clients from outliving hung requests.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// What to answer when the backend fetch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    /// Surface the failure as a protocol error.
    #[default]
    Servfail,
    /// Serve the last successfully fetched payload instead, if any.
    Cached,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Overall timeout for one backend fetch, in seconds. Zero or absent
    /// means the 5 second default.
    #[serde(default)]
    pub timeout_secs: u64,

    /// Upper bound on response-derived TTLs. Zero means no cap.
    #[serde(default)]
    pub max_ttl: u32,

    #[serde(default)]
    pub on_error: OnError,

    /// Fallback cache capacity, used only when `on_error = "cached"`.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl HttpConfig {
    pub fn effective_timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            DEFAULT_FETCH_TIMEOUT
        } else {
            Duration::from_secs(self.timeout_secs)
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 0,
            max_ttl: 0,
            on_error: OnError::default(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

fn default_cache_capacity() -> usize {
    100
}
