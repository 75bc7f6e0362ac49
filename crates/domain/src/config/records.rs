use crate::record::RecordType;
use serde::{Deserialize, Serialize};

/// Placeholder token replaced by the literal query name (trailing dot
/// included) inside an endpoint template before the request is issued.
pub const FQDN_PLACEHOLDER: &str = "%(fqdn)";

/// One configured record: an exact (name, type) pair answered from the
/// given endpoint. Immutable after startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub rtype: RecordType,

    /// Endpoint URI template, may contain [`FQDN_PLACEHOLDER`].
    pub endpoint: String,
}

/// One configured zone: every supported-type query under `origin` is
/// answered from the given endpoint template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ZoneEntry {
    pub origin: String,
    pub endpoint: String,
}

/// Normalize a configured name: lowercase and fully qualified.
pub fn normalize_name(name: &str) -> String {
    let mut name = name.to_lowercase();
    if !name.ends_with('.') {
        name.push('.');
    }
    name
}
