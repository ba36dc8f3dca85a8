pub mod cache;
pub mod forwarding;
pub mod load_balancer;
pub mod resolver;
pub mod server;
pub mod transport;

pub use cache::JsonCacheStore;
pub use load_balancer::{UdpUpstreamClient, UpstreamClient};
pub use resolver::{CachedResolver, RaceResolver, ResolverBuilder};
pub use server::DnsServerHandler;
