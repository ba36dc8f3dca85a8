use super::server::deserialize_port;
use serde::{Deserialize, Serialize};

/// Fallback resolver and per-query timeout.
///
/// The upstream server list itself lives in `servers.json`, not here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_fallback_ip")]
    pub fallback_server_ip: String,

    #[serde(
        default = "default_fallback_port",
        deserialize_with = "deserialize_port"
    )]
    pub fallback_server_port: u16,

    /// Per-upstream query timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            fallback_server_ip: default_fallback_ip(),
            fallback_server_port: default_fallback_port(),
            timeout: default_timeout(),
        }
    }
}

fn default_fallback_ip() -> String {
    "192.168.178.21".to_string()
}

fn default_fallback_port() -> u16 {
    53
}

fn default_timeout() -> u64 {
    2
}
