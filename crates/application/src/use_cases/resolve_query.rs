//! The per-query resolution state machine.
//!
//! One linear decision per query, no state carried across queries:
//! supported type → exact record scan → zone match → fallthrough/NODATA,
//! with fetch and decode errors propagated to the caller untouched.

use crate::ports::PayloadFetcher;
use httprecord_domain::config::{RecordEntry, ZoneEntry};
use httprecord_domain::{decode_payload, zone, DomainError, Fall, RecordType, ResourceRecord};
use std::sync::Arc;
use tracing::debug;

/// Outcome of one resolution. `Answer` may be empty: a reachable backend
/// whose payload decodes to nothing is still an authoritative answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Answer(Vec<ResourceRecord>),
    /// The name may exist, but nothing here answers this type: reply
    /// authoritatively with an empty answer section.
    NoData,
    /// Defer to the next handler in the host chain.
    Fallthrough,
}

pub struct ResolveQueryUseCase {
    records: Vec<RecordEntry>,
    zones: Vec<ZoneEntry>,
    fetcher: Arc<dyn PayloadFetcher>,
    fall: Fall,
}

impl ResolveQueryUseCase {
    pub fn new(
        records: Vec<RecordEntry>,
        zones: Vec<ZoneEntry>,
        fetcher: Arc<dyn PayloadFetcher>,
        fall: Fall,
    ) -> Self {
        Self {
            records,
            zones,
            fetcher,
            fall,
        }
    }

    /// Resolve one query. `qtype` is `None` when the wire type is not one
    /// this server understands; such queries can never be answered from a
    /// backend, so they decline without issuing a fetch.
    pub async fn execute(
        &self,
        qname: &str,
        qtype: Option<RecordType>,
    ) -> Result<Resolution, DomainError> {
        let Some(rtype) = qtype else {
            return Ok(self.decline(qname));
        };

        debug!(name = %qname, rtype = %rtype, "resolving query");

        // Exact (name, type) match, first configured entry wins.
        for record in &self.records {
            if record.name == qname && record.rtype == rtype {
                return self.answer(rtype, qname, &record.endpoint).await;
            }
        }

        // Longest matching origin; among zones carrying that origin, the
        // first configured entry supplies the endpoint.
        let origin = zone::longest_match(self.zones.iter().map(|z| z.origin.as_str()), qname);
        if let Some(origin) = origin {
            debug!(name = %qname, origin = %origin, "found matching zone");
            if let Some(entry) = self.zones.iter().find(|z| z.origin == origin) {
                return self.answer(rtype, qname, &entry.endpoint).await;
            }
        }

        Ok(self.decline(qname))
    }

    async fn answer(
        &self,
        rtype: RecordType,
        qname: &str,
        endpoint: &str,
    ) -> Result<Resolution, DomainError> {
        let fetched = self.fetcher.fetch(qname, endpoint).await?;
        let records = decode_payload(rtype, qname, fetched.ttl, &fetched.payload);
        Ok(Resolution::Answer(records))
    }

    fn decline(&self, qname: &str) -> Resolution {
        if self.fall.through(qname) {
            Resolution::Fallthrough
        } else {
            Resolution::NoData
        }
    }
}
