use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Query to {server} timed out")]
    QueryTimeout { server: SocketAddr },

    #[error("No answer received from {server}")]
    NoAnswer { server: SocketAddr },

    #[error("Transport error talking to {server}: {message}")]
    Transport { server: SocketAddr, message: String },

    #[error("Fallback server {server} failed: {reason}")]
    FallbackExhausted { server: SocketAddr, reason: String },

    #[error("Snapshot not found: {0}")]
    SnapshotMissing(String),

    #[error("Malformed snapshot {path}: {message}")]
    SnapshotMalformed { path: String, message: String },

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Errors produced by a single upstream exchange. The resolver drops these
    /// instead of failing the whole resolution.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            DomainError::QueryTimeout { .. }
                | DomainError::NoAnswer { .. }
                | DomainError::Transport { .. }
                | DomainError::InvalidDnsResponse(_)
        )
    }
}
