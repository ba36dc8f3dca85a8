//! Canonical text encoding of answer records.
//!
//! Cache identity is `(name, type, value)`, so every record type needs one
//! stable textual value. Known rdata variants implement [`CanonicalText`];
//! anything else falls back to the rdata presentation format.

use super::record_type_map::RecordTypeMapper;
use dnsresolver_domain::{RecordType, ResourceRecord};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, PTR, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use tracing::debug;

/// One canonical text value per rdata variant.
pub trait CanonicalText {
    fn canonical_text(&self) -> String;
}

impl CanonicalText for A {
    fn canonical_text(&self) -> String {
        self.0.to_string()
    }
}

impl CanonicalText for AAAA {
    fn canonical_text(&self) -> String {
        self.0.to_string()
    }
}

impl CanonicalText for CNAME {
    fn canonical_text(&self) -> String {
        self.0.to_utf8()
    }
}

impl CanonicalText for NS {
    fn canonical_text(&self) -> String {
        self.0.to_utf8()
    }
}

impl CanonicalText for PTR {
    fn canonical_text(&self) -> String {
        self.0.to_utf8()
    }
}

/// `"<preference> <exchange>"`
impl CanonicalText for MX {
    fn canonical_text(&self) -> String {
        format!("{} {}", self.preference(), self.exchange().to_utf8())
    }
}

/// `"<ns> <mbox> <serial> <refresh> <retry> <expire> <minttl>"`
impl CanonicalText for SOA {
    fn canonical_text(&self) -> String {
        format!(
            "{} {} {} {} {} {} {}",
            self.mname().to_utf8(),
            self.rname().to_utf8(),
            self.serial(),
            self.refresh(),
            self.retry(),
            self.expire(),
            self.minimum()
        )
    }
}

/// Character-strings joined by a single space.
impl CanonicalText for TXT {
    fn canonical_text(&self) -> String {
        self.txt_data()
            .iter()
            .map(|segment| String::from_utf8_lossy(segment).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Canonical value of a wire record.
pub fn canonical_value(record: &Record) -> String {
    match record.data() {
        RData::A(a) => a.canonical_text(),
        RData::AAAA(aaaa) => aaaa.canonical_text(),
        RData::CNAME(cname) => cname.canonical_text(),
        RData::NS(ns) => ns.canonical_text(),
        RData::PTR(ptr) => ptr.canonical_text(),
        RData::MX(mx) => mx.canonical_text(),
        RData::SOA(soa) => soa.canonical_text(),
        RData::TXT(txt) => txt.canonical_text(),
        other => other.to_string(),
    }
}

/// Wire record → cacheable record. `last_query` is left at the sentinel;
/// the cache stamps it on upsert.
pub fn to_resource_record(record: &Record) -> ResourceRecord {
    ResourceRecord::new(
        record.name().to_utf8(),
        RecordTypeMapper::from_hickory(record.record_type()),
        canonical_value(record),
        record.ttl(),
    )
}

/// Stored record → wire record, for answering from static records or the cache.
///
/// Returns `None` for types stored in opaque form or values that no longer parse.
pub fn to_wire_record(record: &ResourceRecord) -> Option<Record> {
    let name = Name::from_str(&record.name).ok()?;
    let rdata = match parse_rdata(record.record_type, &record.value) {
        Some(rdata) => rdata,
        None => {
            debug!(
                name = %record.name,
                record_type = %record.record_type,
                value = %record.value,
                "Stored record cannot be encoded, skipping"
            );
            return None;
        }
    };
    Some(Record::from_rdata(name, record.ttl, rdata))
}

fn parse_name(text: &str) -> Option<Name> {
    Name::from_str(text).ok()
}

fn parse_rdata(record_type: RecordType, value: &str) -> Option<RData> {
    match record_type {
        RecordType::A => value.parse::<Ipv4Addr>().ok().map(|ip| RData::A(A(ip))),
        RecordType::AAAA => value
            .parse::<Ipv6Addr>()
            .ok()
            .map(|ip| RData::AAAA(AAAA(ip))),
        RecordType::CNAME => parse_name(value).map(|n| RData::CNAME(CNAME(n))),
        RecordType::NS => parse_name(value).map(|n| RData::NS(NS(n))),
        RecordType::PTR => parse_name(value).map(|n| RData::PTR(PTR(n))),
        RecordType::MX => {
            let (preference, exchange) = value.split_once(' ')?;
            Some(RData::MX(MX::new(
                preference.parse().ok()?,
                parse_name(exchange.trim())?,
            )))
        }
        RecordType::SOA => {
            let fields: Vec<&str> = value.split_whitespace().collect();
            let [mname, rname, serial, refresh, retry, expire, minimum] = fields.as_slice() else {
                return None;
            };
            Some(RData::SOA(SOA::new(
                parse_name(mname)?,
                parse_name(rname)?,
                serial.parse().ok()?,
                refresh.parse().ok()?,
                retry.parse().ok()?,
                expire.parse().ok()?,
                minimum.parse().ok()?,
            )))
        }
        RecordType::TXT => Some(RData::TXT(TXT::new(txt_segments(value)))),
        _ => None,
    }
}

/// Splits a stored TXT value into character-strings of at most 255 bytes,
/// breaking only on char boundaries.
fn txt_segments(value: &str) -> Vec<String> {
    const MAX_SEGMENT: usize = 255;

    let mut segments = Vec::new();
    let mut current = String::new();
    for ch in value.chars() {
        if current.len() + ch.len_utf8() > MAX_SEGMENT {
            segments.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() || segments.is_empty() {
        segments.push(current);
    }
    segments
}
