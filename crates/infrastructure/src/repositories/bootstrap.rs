use dnsresolver_domain::config::DataFiles;
use dnsresolver_domain::DomainError;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::info;

pub const DEFAULT_SERVERS: &str = r#"{"servers": ["1.1.1.1:53", "1.0.0.1:53"]}"#;

pub const DEFAULT_RECORDS: &str = r#"{"records": [{"name": "example.com.", "type": "A", "value": "93.184.216.34", "ttl": 3600, "last_query": "0001-01-01T00:00:00Z"}]}"#;

pub const DEFAULT_CACHE: &str = r#"{"records": [{"dnsrecord": {"name": "example.com.", "type": "A", "value": "93.184.216.34", "ttl": 3600, "last_query": "0001-01-01T00:00:00Z"}, "expiry": "0001-01-01T00:00:00Z", "timestamp": "0001-01-01T00:00:00Z", "last_query": "0001-01-01T00:00:00Z"}]}"#;

pub const DEFAULT_SETTINGS: &str = r#"{"fallback_server_ip": "192.168.178.21", "fallback_server_port": "53", "timeout": 2, "dns_port": "53", "cache_records": true, "auto_build_ptr_from_a": true}"#;

/// Create any of the four data documents that do not exist yet.
/// Existing files are never touched. Returns how many were created.
pub fn ensure_default_files(files: &DataFiles) -> Result<usize, DomainError> {
    let defaults = [
        (&files.settings, DEFAULT_SETTINGS),
        (&files.servers, DEFAULT_SERVERS),
        (&files.records, DEFAULT_RECORDS),
        (&files.cache, DEFAULT_CACHE),
    ];

    let mut created = 0;
    for (path, content) in defaults {
        if create_if_absent(path, content)? {
            info!(path = %path.display(), "Created default file");
            created += 1;
        }
    }
    Ok(created)
}

fn create_if_absent(path: &Path, content: &str) -> Result<bool, DomainError> {
    let io_error = |e: std::io::Error| DomainError::IoError(format!("{}: {}", path.display(), e));

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(io_error(e)),
    };
    file.write_all(content.as_bytes()).map_err(io_error)?;
    Ok(true)
}
