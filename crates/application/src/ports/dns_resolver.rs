use async_trait::async_trait;
use bytes::Bytes;
use dnsresolver_domain::{DnsQuery, DomainError, ResourceRecord};
use std::fmt;
use std::net::SocketAddr;

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Static record store
    Local,
    /// Live cache entries
    Cache,
    /// First authoritative upstream reply
    Upstream(SocketAddr),
    /// Fallback resolver, after no upstream answered authoritatively
    Fallback(SocketAddr),
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Cache => f.write_str("cache"),
            Self::Upstream(addr) => write!(f, "upstream {addr}"),
            Self::Fallback(addr) => write!(f, "fallback {addr}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DnsResolution {
    /// Answer records in canonical text form.
    pub records: Vec<ResourceRecord>,
    pub authoritative: bool,
    pub source: ResolutionSource,
    /// Wire bytes of the complete upstream DNS response.
    /// Opaque to the application layer; the DNS server handler relays
    /// answers from it when present.
    pub upstream_wire_data: Option<Bytes>,
}

impl DnsResolution {
    pub fn new(records: Vec<ResourceRecord>, source: ResolutionSource) -> Self {
        Self {
            records,
            authoritative: false,
            source,
            upstream_wire_data: None,
        }
    }

    pub fn is_cache_hit(&self) -> bool {
        self.source == ResolutionSource::Cache
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError>;
}
