use crate::dns::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use bytes::Bytes;
use dnsresolver_domain::{DnsQuery, DomainError};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::debug;

/// A successful exchange with one upstream server.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub response: DnsResponse,
    pub server: SocketAddr,
    pub latency_ms: u64,
}

impl UpstreamReply {
    pub fn is_authoritative(&self) -> bool {
        self.response.authoritative
    }
}

/// Asks one question of one server.
///
/// Implementations must fail with `QueryTimeout` when `timeout` elapses and
/// with `NoAnswer` when the reply has an empty answer section.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn query(
        &self,
        query: &DnsQuery,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<UpstreamReply, DomainError>;
}

/// Plain DNS over UDP.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpUpstreamClient;

impl UdpUpstreamClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UpstreamClient for UdpUpstreamClient {
    async fn query(
        &self,
        query: &DnsQuery,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<UpstreamReply, DomainError> {
        let start = Instant::now();
        let (id, query_bytes) = MessageBuilder::build_query_with_id(query)?;

        let transport_response = UdpTransport::new(server)
            .send(&query_bytes, timeout)
            .await
            .inspect_err(|e| debug!(server = %server, query = %query, error = %e, "Upstream query failed"))?;

        let protocol = transport_response.protocol_used;
        let response = ResponseParser::parse_bytes(Bytes::from(transport_response.bytes))?;

        if response.id() != id {
            return Err(DomainError::Transport {
                server,
                message: format!("response id {} does not match query id {}", response.id(), id),
            });
        }

        if !response.has_answers() {
            debug!(
                server = %server,
                query = %query,
                rcode = ResponseParser::rcode_to_status(response.rcode),
                "No answer received"
            );
            return Err(DomainError::NoAnswer { server });
        }

        let latency_ms = start.elapsed().as_millis() as u64;
        debug!(
            server = %server,
            protocol,
            query = %query,
            authoritative = response.authoritative,
            answers = response.answers.len(),
            latency_ms,
            "Upstream answered"
        );

        Ok(UpstreamReply {
            response,
            server,
            latency_ms,
        })
    }
}
