//! DNS resolver with decorators.
//!
//! - **Cache**: writes every answer record to the cache store (outer)
//! - **Core**: upstream race plus fallback (inner)
//!
//! ```ignore
//! use dnsresolver_infrastructure::dns::resolver::ResolverBuilder;
//!
//! let resolver = ResolverBuilder::new(client, servers, fallback, timeout)
//!     .with_cache(cache)
//!     .build();
//! ```

pub mod builder;
pub mod cache_layer;
pub mod core;

pub use builder::ResolverBuilder;
pub use cache_layer::CachedResolver;
pub use core::RaceResolver;
