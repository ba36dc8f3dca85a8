//! Configuration module for the resolver
//!
//! The settings document (`dnsresolver.json`) is flat; each concern below
//! deserializes its own keys from it through `#[serde(flatten)]`:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listening address and DNS port
//! - `upstream`: Fallback server and per-query timeout
//! - `cache`: Cache switch and expiry policy
//! - `local_records`: Static record options
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod local_records;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use cache::{CacheConfig, ExpiryPolicy};
pub use errors::ConfigError;
pub use local_records::LocalRecordsConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config, DataFiles};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
