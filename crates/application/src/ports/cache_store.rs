use chrono::{DateTime, Utc};
use dnsresolver_domain::{CacheEntry, DnsQuery, ResourceRecord};

/// Persistent record cache.
///
/// Every mutating call rewrites the snapshot synchronously before returning;
/// async callers should move these calls onto a blocking thread.
pub trait CacheStore: Send + Sync {
    /// All entries for the query's name and type, expired or not.
    fn lookup(&self, query: &DnsQuery) -> Vec<CacheEntry>;

    /// Insert or refresh the `(name, type, value)` entry. Returns the
    /// collection size afterwards. No-op when caching is disabled.
    fn upsert(&self, record: ResourceRecord, now: DateTime<Utc>) -> usize;

    /// Remove entries with `expires_at <= now`. Returns how many were removed.
    fn prune_expired(&self, now: DateTime<Utc>) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
