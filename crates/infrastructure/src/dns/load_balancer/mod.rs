pub mod parallel;
pub mod query;

pub use parallel::ParallelStrategy;
pub use query::{UdpUpstreamClient, UpstreamClient, UpstreamReply};
