//! dnsresolver application layer: ports and the request-handling use case.
pub mod ports;
pub mod use_cases;
