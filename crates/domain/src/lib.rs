//! httprecord domain layer
//!
//! Pure types and logic shared by every other crate: record types and data,
//! the upstream payload grammar (line parser + per-type decoders), zone
//! suffix matching, the fallthrough set, the error taxonomy and the TOML
//! configuration model. No I/O happens here.

pub mod config;
pub mod decode;
pub mod errors;
pub mod fall;
pub mod line;
pub mod record;
pub mod zone;

pub use config::{Config, ConfigError, HttpConfig, OnError, RecordEntry, ZoneEntry, FQDN_PLACEHOLDER};
pub use decode::decode_payload;
pub use errors::{DomainError, FailureCode};
pub use fall::Fall;
pub use line::RecordLine;
pub use record::{RecordData, RecordType, ResourceRecord};
