//! Per-type decoders turning a fetched payload body into answer records.

use crate::line::{split_lines, RecordLine};
use crate::record::{RecordData, RecordType, ResourceRecord};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Decode a whole response body into records of the requested type.
///
/// Lines that do not match the requested type, or whose payload does not
/// parse for it, are dropped without error. An empty result is a valid
/// outcome, not a failure.
pub fn decode_payload(
    rtype: RecordType,
    name: &str,
    base_ttl: u32,
    body: &str,
) -> Vec<ResourceRecord> {
    split_lines(body)
        .into_iter()
        .filter_map(|line| {
            let ttl = effective_ttl(line.explicit_ttl, base_ttl);
            let data = match rtype {
                RecordType::Txt => decode_txt(&line),
                RecordType::A => decode_a(&line),
                RecordType::Aaaa => decode_aaaa(&line),
            }?;
            Some(ResourceRecord::new(name, ttl, data))
        })
        .collect()
}

/// A per-line TTL may only lower the base TTL, never raise it. Zero means
/// "unset" and falls back to the base.
fn effective_ttl(explicit: Option<u32>, base: u32) -> u32 {
    match explicit {
        Some(ttl) if ttl != 0 && ttl <= base => ttl,
        _ => base,
    }
}

fn decode_txt(line: &RecordLine) -> Option<RecordData> {
    if !line.accepts_type("TXT") {
        return None;
    }
    Some(RecordData::Txt(line.payload.clone()))
}

fn decode_a(line: &RecordLine) -> Option<RecordData> {
    if !line.accepts_type("A") {
        return None;
    }
    match line.explicit_type {
        // Explicitly typed: the payload must be an IPv4 literal.
        Some(_) => line.payload.parse::<Ipv4Addr>().ok().map(RecordData::A),
        // Untyped multi-family lines: only IPv4 addresses belong to A, so
        // the A and AAAA decoders split a shared body cleanly.
        None => match parsed_canonical(&line.payload)? {
            IpAddr::V4(addr) => Some(RecordData::A(addr)),
            IpAddr::V6(_) => None,
        },
    }
}

fn decode_aaaa(line: &RecordLine) -> Option<RecordData> {
    if !line.accepts_type("AAAA") {
        return None;
    }
    match line.explicit_type {
        Some(_) => line.payload.parse::<Ipv6Addr>().ok().map(RecordData::Aaaa),
        // Mirror of the A decoder: untyped lines must be genuine IPv6.
        None => match parsed_canonical(&line.payload)? {
            IpAddr::V6(addr) => Some(RecordData::Aaaa(addr)),
            IpAddr::V4(_) => None,
        },
    }
}

/// Parse an IP literal, folding IPv4-mapped IPv6 into IPv4 so that
/// `::ffff:1.2.3.4` counts as an IPv4 address for family splitting.
fn parsed_canonical(payload: &str) -> Option<IpAddr> {
    payload.parse::<IpAddr>().ok().map(|ip| ip.to_canonical())
}
