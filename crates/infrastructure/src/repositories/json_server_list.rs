use dnsresolver_application::ports::ServerList;
use dnsresolver_domain::DomainError;
use serde::Deserialize;
use std::io::ErrorKind;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use tracing::{info, warn};

const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Deserialize)]
struct ServersDocument {
    #[serde(default)]
    servers: Vec<String>,
}

/// Ordered upstream list from `servers.json`.
#[derive(Debug, Clone, Default)]
pub struct JsonServerList {
    servers: Vec<SocketAddr>,
}

impl JsonServerList {
    pub fn new(servers: Vec<SocketAddr>) -> Self {
        Self { servers }
    }

    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DomainError::SnapshotMissing(path.display().to_string()),
            _ => DomainError::IoError(format!("{}: {}", path.display(), e)),
        })?;
        let document: ServersDocument =
            serde_json::from_str(&content).map_err(|e| DomainError::SnapshotMalformed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let servers: Vec<SocketAddr> = document
            .servers
            .iter()
            .filter_map(|entry| {
                let parsed = parse_server(entry);
                if parsed.is_none() {
                    warn!(entry = %entry, "Skipping unparseable upstream server");
                }
                parsed
            })
            .collect();

        info!(path = %path.display(), servers = servers.len(), "Upstream servers loaded");
        Ok(Self::new(servers))
    }
}

impl ServerList for JsonServerList {
    fn servers(&self) -> Vec<SocketAddr> {
        self.servers.clone()
    }
}

/// `"ip:port"`, `"[v6]:port"` or a bare IP on port 53.
pub fn parse_server(entry: &str) -> Option<SocketAddr> {
    let entry = entry.trim();
    entry
        .parse::<SocketAddr>()
        .ok()
        .or_else(|| {
            entry
                .parse::<IpAddr>()
                .ok()
                .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        })
}
