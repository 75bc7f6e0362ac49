//! httprecord infrastructure layer
//!
//! Adapters at both edges: the reqwest-backed payload fetcher towards the
//! HTTP backends, and the hickory-server request handler towards the wire.

pub mod dns;
pub mod http;

pub use dns::DnsServerHandler;
pub use http::HttpFetcher;
