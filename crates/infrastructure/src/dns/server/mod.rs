pub mod handler;
pub mod udp;

pub use handler::DnsServerHandler;
pub use udp::serve_udp;
