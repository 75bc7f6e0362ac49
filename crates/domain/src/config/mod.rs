//! Configuration model, organized by concern:
//! - `root`: top-level `Config`, loading and CLI overrides
//! - `server`: bind address and port
//! - `http`: fetch timeout, TTL cap and error fallback policy
//! - `records`: the record and zone tables
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod errors;
pub mod http;
pub mod logging;
pub mod records;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use http::{HttpConfig, OnError};
pub use logging::LoggingConfig;
pub use records::{RecordEntry, ZoneEntry, FQDN_PLACEHOLDER};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
