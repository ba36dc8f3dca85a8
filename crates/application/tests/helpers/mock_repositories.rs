#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dnsresolver_application::ports::{
    CacheStore, DnsResolution, DnsResolver, RecordStore, ResolutionSource,
};
use dnsresolver_domain::{CacheEntry, DnsQuery, DomainError, ResourceRecord};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// ============================================================================
// Mock RecordStore
// ============================================================================

#[derive(Default)]
pub struct MockRecordStore {
    records: Vec<ResourceRecord>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ResourceRecord>) -> Self {
        Self { records }
    }
}

impl RecordStore for MockRecordStore {
    fn lookup(&self, query: &DnsQuery) -> Vec<ResourceRecord> {
        self.records
            .iter()
            .filter(|r| r.matches(&query.name, query.record_type))
            .cloned()
            .collect()
    }
}

// ============================================================================
// Mock CacheStore
// ============================================================================

#[derive(Default)]
pub struct MockCacheStore {
    entries: Mutex<Vec<CacheEntry>>,
    prune_calls: AtomicUsize,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<CacheEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            prune_calls: AtomicUsize::new(0),
        }
    }

    pub fn prune_calls(&self) -> usize {
        self.prune_calls.load(Ordering::SeqCst)
    }
}

impl CacheStore for MockCacheStore {
    fn lookup(&self, query: &DnsQuery) -> Vec<CacheEntry> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.record.matches(&query.name, query.record_type))
            .cloned()
            .collect()
    }

    fn upsert(&self, record: ResourceRecord, now: DateTime<Utc>) -> usize {
        let mut entries = self.entries.lock().unwrap();
        match entries.iter_mut().find(|e| e.record.same_key(&record)) {
            Some(existing) => existing.refresh(record.ttl, now),
            None => entries.push(CacheEntry::insert_new(record, now)),
        }
        entries.len()
    }

    fn prune_expired(&self, now: DateTime<Utc>) -> usize {
        self.prune_calls.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| !e.is_expired(now));
        before - entries.len()
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

// ============================================================================
// Mock DnsResolver
// ============================================================================

pub struct MockDnsResolver {
    answer: Option<Vec<ResourceRecord>>,
    upstream: SocketAddr,
    calls: AtomicUsize,
}

impl MockDnsResolver {
    /// Resolver that answers every query with `records` from an authoritative upstream.
    pub fn answering(records: Vec<ResourceRecord>) -> Self {
        Self {
            answer: Some(records),
            upstream: SocketAddr::from(([192, 0, 2, 53], 53)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Resolver whose fallback always fails.
    pub fn failing() -> Self {
        Self {
            answer: None,
            upstream: SocketAddr::from(([192, 0, 2, 54], 53)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, _query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Some(records) => {
                let mut resolution =
                    DnsResolution::new(records.clone(), ResolutionSource::Upstream(self.upstream));
                resolution.authoritative = true;
                Ok(resolution)
            }
            None => Err(DomainError::FallbackExhausted {
                server: self.upstream,
                reason: "mock failure".to_string(),
            }),
        }
    }
}
