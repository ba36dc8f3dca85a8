//! dnsresolver infrastructure: JSON stores, upstream UDP client, the racing
//! resolver and the DNS server adapter.
pub mod dns;
pub mod repositories;
