use super::RecordType;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Seconds between `0001-01-01T00:00:00Z` and the UNIX epoch.
const YEAR_ONE_OFFSET_SECS: i64 = 62_135_596_800;

/// `0001-01-01T00:00:00Z`, the "never queried" sentinel used by the snapshots.
pub fn never_queried() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH - TimeDelta::seconds(YEAR_ONE_OFFSET_SECS)
}

/// A resource record in its canonical text form.
///
/// `name` is kept exactly as received; lookups compare it byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub value: String,
    pub ttl: u32,
    #[serde(default = "never_queried")]
    pub last_query: DateTime<Utc>,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        value: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            value: value.into(),
            ttl,
            last_query: never_queried(),
        }
    }

    /// Identity used for cache dedup: `(name, type, value)`.
    pub fn same_key(&self, other: &ResourceRecord) -> bool {
        self.name == other.name && self.record_type == other.record_type && self.value == other.value
    }

    pub fn matches(&self, name: &str, record_type: RecordType) -> bool {
        self.name == name && self.record_type == record_type
    }

    pub fn was_queried(&self) -> bool {
        self.last_query != never_queried()
    }
}
