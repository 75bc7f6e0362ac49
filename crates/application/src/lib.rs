//! httprecord application layer
//!
//! Ports and orchestration: the backend fetcher port, the fallback-cache
//! decorator around it, and the per-query resolution state machine.

pub mod ports;
pub mod services;
pub mod use_cases;

pub use ports::{FetchedPayload, PayloadFetcher};
pub use services::FallbackCachingFetcher;
pub use use_cases::{Resolution, ResolveQueryUseCase};
