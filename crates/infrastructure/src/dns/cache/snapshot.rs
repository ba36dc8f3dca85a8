use chrono::{DateTime, Utc};
use dnsresolver_domain::{never_queried, CacheEntry, DomainError, ResourceRecord};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One persisted cache entry.
#[derive(Debug, Serialize, Deserialize)]
struct WrappedRecord {
    dnsrecord: ResourceRecord,
    #[serde(default = "never_queried")]
    expiry: DateTime<Utc>,
    #[serde(default = "never_queried")]
    timestamp: DateTime<Utc>,
    #[serde(default = "never_queried")]
    last_query: DateTime<Utc>,
}

/// Older snapshots store bare records.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredRecord {
    Wrapped(WrappedRecord),
    Flat(ResourceRecord),
}

impl StoredRecord {
    fn into_entry(self) -> CacheEntry {
        let record = match self {
            StoredRecord::Wrapped(wrapped) => {
                let mut record = wrapped.dnsrecord;
                if !record.was_queried() {
                    record.last_query = wrapped.last_query;
                }
                record
            }
            StoredRecord::Flat(record) => record,
        };
        CacheEntry::restore(record)
    }
}

#[derive(Debug, Deserialize)]
struct StoredSnapshot {
    #[serde(default)]
    records: Vec<StoredRecord>,
}

#[derive(Debug, Serialize)]
struct Snapshot {
    records: Vec<WrappedRecord>,
}

impl From<&CacheEntry> for WrappedRecord {
    fn from(entry: &CacheEntry) -> Self {
        let mut dnsrecord = entry.record.clone();
        dnsrecord.ttl = entry.persisted_ttl();
        Self {
            last_query: dnsrecord.last_query,
            dnsrecord,
            expiry: entry.expires_at,
            timestamp: entry.inserted_at,
        }
    }
}

/// Read a snapshot. Each entry expires at `last_query + ttl`, so restored
/// entries may already be expired.
pub fn load(path: &Path) -> Result<Vec<CacheEntry>, DomainError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DomainError::SnapshotMissing(path.display().to_string()),
        _ => DomainError::IoError(format!("{}: {}", path.display(), e)),
    })?;

    let snapshot: StoredSnapshot =
        serde_json::from_str(&content).map_err(|e| DomainError::SnapshotMalformed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let entries: Vec<CacheEntry> = snapshot
        .records
        .into_iter()
        .map(StoredRecord::into_entry)
        .collect();

    debug!(path = %path.display(), entries = entries.len(), "Cache snapshot loaded");
    Ok(entries)
}

/// Replace the snapshot with `entries`: write a sibling temp file, then rename.
pub fn save(path: &Path, entries: &[CacheEntry]) -> Result<(), DomainError> {
    let snapshot = Snapshot {
        records: entries.iter().map(WrappedRecord::from).collect(),
    };
    let data = serde_json::to_vec_pretty(&snapshot)
        .map_err(|e| DomainError::IoError(format!("serialize cache snapshot: {}", e)))?;

    let temp_path = temp_path_for(path);
    std::fs::write(&temp_path, &data)
        .map_err(|e| DomainError::IoError(format!("{}: {}", temp_path.display(), e)))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;

    debug!(path = %path.display(), entries = entries.len(), bytes = data.len(), "Cache snapshot saved");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
