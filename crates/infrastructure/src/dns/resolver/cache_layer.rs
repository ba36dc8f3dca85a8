use async_trait::async_trait;
use chrono::Utc;
use dnsresolver_application::ports::{CacheStore, DnsResolution, DnsResolver};
use dnsresolver_domain::{DnsQuery, DomainError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Cache decorator for DNS resolver
///
/// Wraps another resolver and writes every answer record it returns into the
/// cache store. Reads happen in the request path, not here.
pub struct CachedResolver {
    inner: Arc<dyn DnsResolver>,
    cache: Arc<dyn CacheStore>,
}

impl CachedResolver {
    pub fn new(inner: Arc<dyn DnsResolver>, cache: Arc<dyn CacheStore>) -> Self {
        Self { inner, cache }
    }

    async fn store_in_cache(&self, query: &DnsQuery, resolution: &DnsResolution) {
        if resolution.records.is_empty() {
            return;
        }

        let cache = Arc::clone(&self.cache);
        let records = resolution.records.clone();
        let stored = tokio::task::spawn_blocking(move || {
            let now = Utc::now();
            records
                .into_iter()
                .map(|record| cache.upsert(record, now))
                .last()
                .unwrap_or_default()
        })
        .await;

        match stored {
            Ok(size) => debug!(
                query = %query,
                records = resolution.records.len(),
                cache_size = size,
                "Answer records cached"
            ),
            Err(e) => warn!(query = %query, error = %e, "Cache write task failed"),
        }
    }
}

#[async_trait]
impl DnsResolver for CachedResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        let resolution = self.inner.resolve(query).await?;
        self.store_in_cache(query, &resolution).await;
        Ok(resolution)
    }
}
