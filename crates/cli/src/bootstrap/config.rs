use dnsresolver_domain::{CliOverrides, Config};
use std::path::Path;
use tracing::info;

pub fn load_config(config_path: &Path, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(Some(config_path), cli_overrides)?;
    config.validate()?;

    info!(
        config_file = %config_path.display(),
        dns_port = config.server.dns_port,
        bind = %config.server.bind_address,
        fallback = %config.fallback_addr()?,
        timeout_secs = config.upstream.timeout,
        cache_records = config.cache.cache_records,
        "Configuration loaded"
    );

    Ok(config)
}
