use super::{CacheConfig, ConfigError, LocalRecordsConfig, LoggingConfig, ServerConfig, UpstreamConfig};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SETTINGS_FILE: &str = "dnsresolver.json";
pub const CACHE_FILE: &str = "cache.json";
pub const RECORDS_FILE: &str = "records.json";
pub const SERVERS_FILE: &str = "servers.json";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(flatten)]
    pub server: ServerConfig,

    #[serde(flatten)]
    pub upstream: UpstreamConfig,

    #[serde(flatten)]
    pub cache: CacheConfig,

    #[serde(flatten)]
    pub local_records: LocalRecordsConfig,

    #[serde(flatten)]
    pub logging: LoggingConfig,

    /// Directory holding the cache, record and server documents
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            cache: CacheConfig::default(),
            local_records: LocalRecordsConfig::default(),
            logging: LoggingConfig::default(),
            data_dir: default_data_dir(),
        }
    }
}

/// CLI overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub disable_cache: bool,
}

/// Locations of the JSON documents the resolver reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub settings: PathBuf,
    pub cache: PathBuf,
    pub records: PathBuf,
    pub servers: PathBuf,
}

impl DataFiles {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            settings: dir.join(SETTINGS_FILE),
            cache: dir.join(CACHE_FILE),
            records: dir.join(RECORDS_FILE),
            servers: dir.join(SERVERS_FILE),
        }
    }
}

impl Config {
    /// Load configuration from a settings file (or defaults) and apply CLI overrides
    pub fn load(path: Option<&Path>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    })?;
                Self::from_json(&content, &path.display().to_string())?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_json(content: &str, origin: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(dir) = overrides.data_dir {
            self.data_dir = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.disable_cache {
            self.cache.cache_records = false;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.timeout == 0 {
            return Err(ConfigError::Validation(
                "timeout must be at least 1 second".to_string(),
            ));
        }
        self.fallback_addr()?;
        self.dns_bind_addr()?;
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }

    pub fn fallback_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.upstream.fallback_server_ip.trim().parse().map_err(|_| {
            ConfigError::Validation(format!(
                "fallback_server_ip '{}' is not an IP address",
                self.upstream.fallback_server_ip
            ))
        })?;
        Ok(SocketAddr::new(ip, self.upstream.fallback_server_port))
    }

    pub fn dns_bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.server.bind_address.trim().parse().map_err(|_| {
            ConfigError::Validation(format!(
                "bind_address '{}' is not an IP address",
                self.server.bind_address
            ))
        })?;
        Ok(SocketAddr::new(ip, self.server.dns_port))
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream.timeout)
    }

    pub fn files(&self) -> DataFiles {
        DataFiles::in_dir(&self.data_dir)
    }
}
