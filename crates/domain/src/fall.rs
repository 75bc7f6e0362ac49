//! Fallthrough policy: the set of origins for which an unanswerable query
//! is deferred to the next handler instead of answered authoritatively.

use crate::zone;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fall {
    zones: Vec<String>,
}

impl Fall {
    /// Fallthrough for the given origins. An empty list means "fall
    /// through for every name", matching the bare `fallthrough` directive.
    pub fn from_zones(zones: Vec<String>) -> Self {
        if zones.is_empty() {
            return Self {
                zones: vec![".".to_string()],
            };
        }
        Self { zones }
    }

    /// The default value falls through for nothing.
    pub fn is_enabled(&self) -> bool {
        !self.zones.is_empty()
    }

    /// Should a query for `qname` be handed to the next handler?
    pub fn through(&self, qname: &str) -> bool {
        self.zones.iter().any(|origin| zone::matches(qname, origin))
    }
}
