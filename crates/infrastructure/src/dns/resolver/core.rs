use super::super::load_balancer::{ParallelStrategy, UpstreamClient, UpstreamReply};
use async_trait::async_trait;
use dnsresolver_application::ports::{DnsResolution, DnsResolver, ResolutionSource, ServerList};
use dnsresolver_domain::{DnsQuery, DomainError};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Races every upstream for an authoritative answer and falls back to a
/// single recursive server when none arrives.
pub struct RaceResolver {
    strategy: ParallelStrategy,
    client: Arc<dyn UpstreamClient>,
    servers: Arc<dyn ServerList>,
    fallback: SocketAddr,
    timeout: Duration,
}

impl RaceResolver {
    pub fn new(
        client: Arc<dyn UpstreamClient>,
        servers: Arc<dyn ServerList>,
        fallback: SocketAddr,
        timeout: Duration,
    ) -> Self {
        Self {
            strategy: ParallelStrategy::new(Arc::clone(&client), timeout),
            client,
            servers,
            fallback,
            timeout,
        }
    }

    /// Resolve `query` against an explicit server set.
    ///
    /// The fallback is queried exactly once, and only after every upstream
    /// task has completed without an authoritative reply.
    pub async fn resolve_with(
        &self,
        query: &DnsQuery,
        servers: &[SocketAddr],
        fallback: SocketAddr,
    ) -> Result<DnsResolution, DomainError> {
        if let Some(reply) = self.strategy.race_authoritative(servers, query).await {
            let source = ResolutionSource::Upstream(reply.server);
            return Ok(into_resolution(reply, source));
        }

        info!(query = %query, fallback = %fallback, upstreams = servers.len(), "No authoritative answer, asking fallback");

        match self.client.query(query, fallback, self.timeout).await {
            Ok(reply) => {
                debug!(query = %query, fallback = %fallback, latency_ms = reply.latency_ms, "Fallback answered");
                let source = ResolutionSource::Fallback(reply.server);
                Ok(into_resolution(reply, source))
            }
            Err(e) => {
                warn!(query = %query, fallback = %fallback, error = %e, "Fallback failed");
                Err(DomainError::FallbackExhausted {
                    server: fallback,
                    reason: e.to_string(),
                })
            }
        }
    }
}

fn into_resolution(reply: UpstreamReply, source: ResolutionSource) -> DnsResolution {
    let response = reply.response;
    DnsResolution {
        records: response.answers,
        authoritative: response.authoritative,
        source,
        upstream_wire_data: Some(response.raw_bytes),
    }
}

#[async_trait]
impl DnsResolver for RaceResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        let servers = self.servers.servers();
        self.resolve_with(query, &servers, self.fallback).await
    }
}
