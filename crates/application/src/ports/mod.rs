pub mod cache_store;
pub mod dns_resolver;
pub mod record_store;

pub use cache_store::CacheStore;
pub use dns_resolver::{DnsResolution, DnsResolver, ResolutionSource};
pub use record_store::{RecordStore, ServerList};
