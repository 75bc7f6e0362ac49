use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use thiserror::Error;

/// Record types this server can answer from an HTTP backend.
///
/// The set is closed on purpose: configuration entries naming any other
/// type are rejected at load time, so resolution never has to dispatch on
/// a type it cannot decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum RecordType {
    Txt,
    A,
    Aaaa,
}

#[derive(Error, Debug)]
#[error("unsupported record type: {0}")]
pub struct UnsupportedRecordType(pub String);

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Txt => "TXT",
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
        }
    }

    /// Parse a type keyword, case-insensitively.
    pub fn from_keyword(keyword: &str) -> Option<RecordType> {
        match keyword.to_ascii_uppercase().as_str() {
            "TXT" => Some(RecordType::Txt),
            "A" => Some(RecordType::A),
            "AAAA" => Some(RecordType::Aaaa),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for RecordType {
    type Error = UnsupportedRecordType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RecordType::from_keyword(&value).ok_or(UnsupportedRecordType(value))
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        value.as_str().to_owned()
    }
}

/// Typed payload of one answer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    Txt(String),
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::Txt(_) => RecordType::Txt,
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::Aaaa,
        }
    }
}

/// One decoded answer record, ready to be written into a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Fully qualified owner name.
    pub name: String,
    /// Effective TTL in seconds, already capped by the base TTL.
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }
}
