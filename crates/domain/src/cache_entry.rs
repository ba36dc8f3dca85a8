use crate::ResourceRecord;
use chrono::{DateTime, TimeDelta, Utc};

/// A cached record with its absolute expiry.
///
/// Expiry is checked lazily: an entry past `expires_at` stays stored until
/// something explicitly prunes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub record: ResourceRecord,
    pub inserted_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

fn ttl_delta(ttl: u32) -> TimeDelta {
    TimeDelta::seconds(i64::from(ttl))
}

impl CacheEntry {
    /// First insert of a record answered at `now`.
    pub fn insert_new(mut record: ResourceRecord, now: DateTime<Utc>) -> Self {
        record.last_query = now;
        let expires_at = now + ttl_delta(record.ttl);
        Self {
            record,
            inserted_at: now,
            expires_at,
        }
    }

    /// Rebuild an entry from a persisted record.
    ///
    /// Expiry is anchored on the record's `last_query`, not on the load time,
    /// so time spent while the process was down still counts.
    pub fn restore(record: ResourceRecord) -> Self {
        let inserted_at = record.last_query;
        let expires_at = inserted_at + ttl_delta(record.ttl);
        Self {
            record,
            inserted_at,
            expires_at,
        }
    }

    /// Refresh after a repeat answer for the same key.
    pub fn refresh(&mut self, ttl: u32, now: DateTime<Utc>) {
        self.record.ttl = ttl;
        self.record.last_query = now;
        self.expires_at = now + ttl_delta(ttl);
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Seconds left before expiry, zero once expired.
    pub fn remaining_ttl(&self, now: DateTime<Utc>) -> u32 {
        clamp_secs((self.expires_at - now).num_seconds() as f64)
    }

    /// TTL written to snapshots: `round(expires_at - inserted_at)`.
    pub fn persisted_ttl(&self) -> u32 {
        let millis = (self.expires_at - self.inserted_at).num_milliseconds() as f64;
        clamp_secs((millis / 1000.0).round())
    }
}

fn clamp_secs(secs: f64) -> u32 {
    secs.clamp(0.0, f64::from(u32::MAX)) as u32
}
