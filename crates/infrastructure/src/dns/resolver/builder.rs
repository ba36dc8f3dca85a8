use super::super::load_balancer::UpstreamClient;
use super::cache_layer::CachedResolver;
use super::core::RaceResolver;
use dnsresolver_application::ports::{CacheStore, DnsResolver, ServerList};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct ResolverBuilder {
    client: Arc<dyn UpstreamClient>,
    servers: Arc<dyn ServerList>,
    fallback: SocketAddr,
    timeout: Duration,
    cache: Option<Arc<dyn CacheStore>>,
}

impl ResolverBuilder {
    pub fn new(
        client: Arc<dyn UpstreamClient>,
        servers: Arc<dyn ServerList>,
        fallback: SocketAddr,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            servers,
            fallback,
            timeout,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn CacheStore>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(self) -> Arc<dyn DnsResolver> {
        info!(
            fallback = %self.fallback,
            timeout_ms = self.timeout.as_millis() as u64,
            cache = self.cache.is_some(),
            "Building DNS resolver"
        );

        let core: Arc<dyn DnsResolver> = Arc::new(RaceResolver::new(
            self.client,
            self.servers,
            self.fallback,
            self.timeout,
        ));

        match self.cache {
            Some(cache) => Arc::new(CachedResolver::new(core, cache)),
            None => core,
        }
    }
}
