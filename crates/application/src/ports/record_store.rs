use dnsresolver_domain::{DnsQuery, ResourceRecord};
use std::net::SocketAddr;

/// Static records consulted before the cache and the upstreams.
pub trait RecordStore: Send + Sync {
    fn lookup(&self, query: &DnsQuery) -> Vec<ResourceRecord>;
}

/// Ordered upstream server list.
pub trait ServerList: Send + Sync {
    fn servers(&self) -> Vec<SocketAddr>;
}
