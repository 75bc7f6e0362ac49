use std::time::Duration;
use thiserror::Error;

/// Protocol failure code an upstream-indicated error maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCode {
    /// The backend says the name does not exist (HTTP 404).
    NameError,
    /// The backend itself failed (HTTP 5xx).
    ServerFailure,
}

#[derive(Error, Debug)]
pub enum DomainError {
    /// The backend answered with a status that maps directly onto a DNS
    /// failure code. Never retried; only a fallback-cache hit can mask it.
    #[error("upstream answered HTTP {http_status}")]
    BackendIndicated {
        http_status: u16,
        failure: FailureCode,
    },

    #[error("backend returned a body longer than {0} bytes")]
    BodyTooLong(usize),

    #[error("request to {endpoint} timed out after {timeout:?}")]
    FetchTimeout { endpoint: String, timeout: Duration },

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("invalid domain name: {0}")]
    InvalidDomainName(String),
}

impl DomainError {
    /// The failure code carried by an upstream-indicated error, if any.
    /// Everything else renders as a generic server failure.
    pub fn failure_code(&self) -> FailureCode {
        match self {
            DomainError::BackendIndicated { failure, .. } => *failure,
            _ => FailureCode::ServerFailure,
        }
    }
}
