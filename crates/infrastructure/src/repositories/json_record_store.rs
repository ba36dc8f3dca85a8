use dnsresolver_application::ports::RecordStore;
use dnsresolver_domain::{DnsQuery, DomainError, RecordType, ResourceRecord};
use serde::Deserialize;
use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::Path;
use tracing::{info, instrument};

const IPV4_REVERSE_SUFFIX: &str = ".in-addr.arpa";
const IPV6_REVERSE_SUFFIX: &str = ".ip6.arpa";

#[derive(Debug, Deserialize)]
struct RecordsDocument {
    #[serde(default)]
    records: Vec<ResourceRecord>,
}

/// Static records loaded once from `records.json`.
pub struct JsonRecordStore {
    records: Vec<ResourceRecord>,
    auto_build_ptr: bool,
}

impl JsonRecordStore {
    pub fn new(records: Vec<ResourceRecord>, auto_build_ptr: bool) -> Self {
        Self {
            records,
            auto_build_ptr,
        }
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path, auto_build_ptr: bool) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DomainError::SnapshotMissing(path.display().to_string()),
            _ => DomainError::IoError(format!("{}: {}", path.display(), e)),
        })?;
        let document: RecordsDocument =
            serde_json::from_str(&content).map_err(|e| DomainError::SnapshotMalformed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        info!(records = document.records.len(), auto_build_ptr, "Static records loaded");
        Ok(Self::new(document.records, auto_build_ptr))
    }

    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    /// PTR answers built from the A/AAAA record that owns the address.
    fn synthesize_ptr(&self, query_name: &str) -> Vec<ResourceRecord> {
        let Some(ip) = reverse_name_to_ip(query_name) else {
            return Vec::new();
        };

        self.records
            .iter()
            .filter(|record| record.record_type.is_address())
            .filter(|record| record.value.parse::<IpAddr>().is_ok_and(|value| value == ip))
            .map(|record| {
                ResourceRecord::new(query_name, RecordType::PTR, record.name.clone(), record.ttl)
            })
            .collect()
    }
}

impl RecordStore for JsonRecordStore {
    fn lookup(&self, query: &DnsQuery) -> Vec<ResourceRecord> {
        let found: Vec<ResourceRecord> = self
            .records
            .iter()
            .filter(|record| record.matches(&query.name, query.record_type))
            .cloned()
            .collect();

        if found.is_empty() && self.auto_build_ptr && query.record_type == RecordType::PTR {
            return self.synthesize_ptr(&query.name);
        }
        found
    }
}

/// `4.3.2.1.in-addr.arpa.` → `1.2.3.4`; the 32-nibble `ip6.arpa.` form → IPv6.
pub fn reverse_name_to_ip(name: &str) -> Option<IpAddr> {
    let name = name.trim_end_matches('.').to_ascii_lowercase();

    if let Some(labels) = name.strip_suffix(IPV4_REVERSE_SUFFIX) {
        let octets: Vec<u8> = labels
            .split('.')
            .rev()
            .map(|label| label.parse::<u8>().ok())
            .collect::<Option<_>>()?;
        let octets: [u8; 4] = octets.try_into().ok()?;
        return Some(IpAddr::V4(Ipv4Addr::from(octets)));
    }

    if let Some(labels) = name.strip_suffix(IPV6_REVERSE_SUFFIX) {
        let nibbles: Vec<u8> = labels
            .split('.')
            .rev()
            .map(|label| match label.len() {
                1 => u8::from_str_radix(label, 16).ok(),
                _ => None,
            })
            .collect::<Option<_>>()?;
        if nibbles.len() != 32 {
            return None;
        }
        let value = nibbles
            .iter()
            .fold(0u128, |acc, nibble| (acc << 4) | u128::from(*nibble));
        return Some(IpAddr::V6(Ipv6Addr::from(value)));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(auto_build_ptr: bool) -> JsonRecordStore {
        JsonRecordStore::new(
            vec![
                ResourceRecord::new("example.com.", RecordType::A, "93.184.216.34", 3600),
                ResourceRecord::new("example.com.", RecordType::A, "93.184.216.35", 3600),
                ResourceRecord::new("v6.example.com.", RecordType::AAAA, "2001:db8::1", 600),
            ],
            auto_build_ptr,
        )
    }

    #[test]
    fn test_lookup_matches_name_and_type_exactly() {
        let store = store(true);

        assert_eq!(store.lookup(&DnsQuery::new("example.com.", RecordType::A)).len(), 2);
        assert!(store.lookup(&DnsQuery::new("EXAMPLE.com.", RecordType::A)).is_empty());
        assert!(store.lookup(&DnsQuery::new("example.com.", RecordType::MX)).is_empty());
    }

    #[test]
    fn test_ptr_synthesized_from_a_record() {
        let answers = store(true).lookup(&DnsQuery::new("34.216.184.93.in-addr.arpa.", RecordType::PTR));

        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].name, "34.216.184.93.in-addr.arpa.");
        assert_eq!(answers[0].value, "example.com.");
        assert_eq!(answers[0].ttl, 3600);
    }

    #[test]
    fn test_ptr_synthesized_from_aaaa_record() {
        let name = "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa.";
        let answers = store(true).lookup(&DnsQuery::new(name, RecordType::PTR));

        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].value, "v6.example.com.");
    }

    #[test]
    fn test_ptr_synthesis_can_be_disabled() {
        let answers = store(false).lookup(&DnsQuery::new("34.216.184.93.in-addr.arpa.", RecordType::PTR));
        assert!(answers.is_empty());
    }

    #[test]
    fn test_reverse_names() {
        assert_eq!(
            reverse_name_to_ip("1.0.168.192.IN-ADDR.ARPA"),
            Some("192.168.0.1".parse().unwrap())
        );
        assert_eq!(reverse_name_to_ip("0.168.192.in-addr.arpa."), None);
        assert_eq!(reverse_name_to_ip("300.0.168.192.in-addr.arpa."), None);
        assert_eq!(reverse_name_to_ip("example.com."), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(
            &path,
            r#"{"records": [{"name": "example.com.", "type": "A", "value": "93.184.216.34", "ttl": 3600, "last_query": "0001-01-01T00:00:00Z"}]}"#,
        )
        .unwrap();

        let store = JsonRecordStore::load(&path, true).unwrap();
        assert_eq!(store.records().len(), 1);

        let missing = JsonRecordStore::load(&dir.path().join("nope.json"), true);
        assert!(matches!(missing, Err(DomainError::SnapshotMissing(_))));
    }
}
