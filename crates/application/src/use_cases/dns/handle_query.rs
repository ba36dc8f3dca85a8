use crate::ports::{CacheStore, DnsResolution, DnsResolver, RecordStore, ResolutionSource};
use chrono::{DateTime, Utc};
use dnsresolver_domain::{DnsQuery, DomainError, ExpiryPolicy};
use std::sync::Arc;
use tracing::{debug, warn};

/// Request-path decision flow: static records, then live cache entries,
/// then the resolver.
pub struct HandleDnsQueryUseCase {
    records: Arc<dyn RecordStore>,
    cache: Arc<dyn CacheStore>,
    resolver: Arc<dyn DnsResolver>,
    expiry_policy: ExpiryPolicy,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        records: Arc<dyn RecordStore>,
        cache: Arc<dyn CacheStore>,
        resolver: Arc<dyn DnsResolver>,
        expiry_policy: ExpiryPolicy,
    ) -> Self {
        Self {
            records,
            cache,
            resolver,
            expiry_policy,
        }
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        self.execute_at(query, Utc::now()).await
    }

    pub async fn execute_at(
        &self,
        query: &DnsQuery,
        now: DateTime<Utc>,
    ) -> Result<DnsResolution, DomainError> {
        let local = self.records.lookup(query);
        if !local.is_empty() {
            debug!(query = %query, answers = local.len(), "Static record HIT");
            let mut resolution = DnsResolution::new(local, ResolutionSource::Local);
            resolution.authoritative = true;
            return Ok(resolution);
        }

        if let Some(cached) = self.lookup_cache(query, now).await {
            return Ok(cached);
        }

        debug!(query = %query, "Cache MISS");
        self.resolver.resolve(query).await
    }

    async fn lookup_cache(&self, query: &DnsQuery, now: DateTime<Utc>) -> Option<DnsResolution> {
        let entries = self.cache.lookup(query);
        if entries.is_empty() {
            return None;
        }

        let (live, expired): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|entry| !entry.is_expired(now));

        if !expired.is_empty() && self.expiry_policy == ExpiryPolicy::Evict {
            let cache = Arc::clone(&self.cache);
            match tokio::task::spawn_blocking(move || cache.prune_expired(now)).await {
                Ok(removed) => debug!(query = %query, removed, "Pruned expired cache entries"),
                Err(e) => warn!(error = %e, "Cache prune task failed"),
            }
        }

        if live.is_empty() {
            debug!(query = %query, stale = expired.len(), "Cache entries expired");
            return None;
        }

        debug!(query = %query, answers = live.len(), "Cache HIT");
        let records = live
            .into_iter()
            .map(|entry| {
                let remaining = entry.remaining_ttl(now);
                let mut record = entry.record;
                record.ttl = remaining;
                record
            })
            .collect();

        Some(DnsResolution::new(records, ResolutionSource::Cache))
    }
}
