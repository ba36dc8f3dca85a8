//! dnsresolver domain layer
pub mod cache_entry;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;

pub use cache_entry::CacheEntry;
pub use config::{CliOverrides, Config, ConfigError, ExpiryPolicy};
pub use dns_query::DnsQuery;
pub use dns_record::{never_queried, RecordType, ResourceRecord};
pub use errors::DomainError;
