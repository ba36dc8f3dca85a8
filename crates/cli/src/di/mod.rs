//! Wiring: one context object owns every store and hands out the handler.

use dnsresolver_application::ports::CacheStore;
use dnsresolver_application::use_cases::HandleDnsQueryUseCase;
use dnsresolver_domain::Config;
use dnsresolver_infrastructure::dns::cache::JsonCacheStore;
use dnsresolver_infrastructure::dns::load_balancer::UdpUpstreamClient;
use dnsresolver_infrastructure::dns::resolver::ResolverBuilder;
use dnsresolver_infrastructure::dns::server::DnsServerHandler;
use dnsresolver_infrastructure::repositories::{JsonRecordStore, JsonServerList};
use std::sync::Arc;
use tracing::info;

pub struct Services {
    cache: Arc<JsonCacheStore>,
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl Services {
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let files = config.files();

        let cache = Arc::new(JsonCacheStore::open(&files.cache, config.cache.cache_records)?);
        let records = Arc::new(JsonRecordStore::load(
            &files.records,
            config.local_records.auto_build_ptr_from_a,
        )?);
        let servers = Arc::new(JsonServerList::load(&files.servers)?);

        let resolver = ResolverBuilder::new(
            Arc::new(UdpUpstreamClient::new()),
            servers,
            config.fallback_addr()?,
            config.query_timeout(),
        )
        .with_cache(cache.clone())
        .build();

        let use_case = Arc::new(HandleDnsQueryUseCase::new(
            records.clone(),
            cache.clone(),
            resolver,
            config.cache.cache_expiry_policy,
        ));

        info!(
            cache_path = %cache.path().display(),
            cache_enabled = cache.is_enabled(),
            cache_entries = cache.len(),
            static_records = records.records().len(),
            expiry_policy = ?config.cache.cache_expiry_policy,
            "Services wired"
        );

        Ok(Self { cache, use_case })
    }

    pub fn dns_handler(&self) -> DnsServerHandler {
        DnsServerHandler::new(self.use_case.clone())
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
