use super::snapshot;
use chrono::{DateTime, Utc};
use dnsresolver_application::ports::CacheStore;
use dnsresolver_domain::{CacheEntry, DnsQuery, DomainError, ResourceRecord};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Ordered cache collection backed by a JSON snapshot.
///
/// The lock is held across read-modify-write-and-persist, so concurrent
/// upserts never lose updates or interleave file writes.
pub struct JsonCacheStore {
    path: PathBuf,
    enabled: bool,
    entries: Mutex<Vec<CacheEntry>>,
}

impl JsonCacheStore {
    pub fn new(path: impl Into<PathBuf>, enabled: bool) -> Self {
        Self::with_entries(path, enabled, Vec::new())
    }

    pub fn with_entries(path: impl Into<PathBuf>, enabled: bool, entries: Vec<CacheEntry>) -> Self {
        Self {
            path: path.into(),
            enabled,
            entries: Mutex::new(entries),
        }
    }

    /// Load the snapshot at `path`. A missing file starts an empty cache;
    /// a malformed one is an error.
    pub fn open(path: impl Into<PathBuf>, enabled: bool) -> Result<Self, DomainError> {
        let path = path.into();
        let entries = match snapshot::load(&path) {
            Ok(entries) => entries,
            Err(DomainError::SnapshotMissing(_)) => {
                info!(path = %path.display(), "No cache snapshot, starting empty");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        info!(path = %path.display(), entries = entries.len(), enabled, "Cache store opened");
        Ok(Self::with_entries(path, enabled, entries))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Copy of the whole collection in insertion order.
    pub fn entries(&self) -> Vec<CacheEntry> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, entries: &[CacheEntry]) {
        if let Err(e) = snapshot::save(&self.path, entries) {
            warn!(path = %self.path.display(), error = %e, "Failed to save cache snapshot");
        }
    }
}

impl CacheStore for JsonCacheStore {
    fn lookup(&self, query: &DnsQuery) -> Vec<CacheEntry> {
        self.lock()
            .iter()
            .filter(|entry| entry.record.matches(&query.name, query.record_type))
            .cloned()
            .collect()
    }

    fn upsert(&self, record: ResourceRecord, now: DateTime<Utc>) -> usize {
        let mut entries = self.lock();
        if !self.enabled {
            return entries.len();
        }

        match entries.iter_mut().find(|entry| entry.record.same_key(&record)) {
            Some(existing) => {
                existing.refresh(record.ttl, now);
                debug!(name = %record.name, record_type = %record.record_type, ttl = record.ttl, "Cache entry refreshed");
            }
            None => {
                debug!(name = %record.name, record_type = %record.record_type, ttl = record.ttl, "Cache entry added");
                entries.push(CacheEntry::insert_new(record, now));
            }
        }

        self.persist(&entries);
        entries.len()
    }

    fn prune_expired(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|entry| !entry.is_expired(now));
        let removed = before - entries.len();

        if removed > 0 {
            self.persist(&entries);
        }
        removed
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}
