//! # dnsresolver
//!
//! Caching DNS forwarder: static records, a persistent JSON cache, a race
//! across upstream servers for an authoritative answer, and a fallback.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use dnsresolver_domain::config::DataFiles;
use dnsresolver_domain::CliOverrides;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "dnsresolver")]
#[command(version)]
#[command(about = "Caching, fallback-aware DNS forwarder")]
struct Cli {
    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Settings file (default: <data-dir>/dnsresolver.json)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Directory holding the settings, cache, records and servers documents
    #[arg(short = 'd', long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Serve from the existing cache but never write to it
    #[arg(long)]
    no_cache: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let created = bootstrap::prepare_data_dir(&DataFiles::in_dir(&data_dir))?;

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| DataFiles::in_dir(&data_dir).settings);
    let overrides = CliOverrides {
        dns_port: cli.port,
        bind_address: cli.bind,
        data_dir: cli.data_dir,
        log_level: cli.log_level,
        disable_cache: cli.no_cache,
    };
    let config = bootstrap::load_config(&config_path, overrides)?;

    bootstrap::init_logging(&config);
    if created > 0 {
        info!(created, data_dir = %data_dir.display(), "Default data files written");
    }
    if config.data_dir != data_dir {
        bootstrap::prepare_data_dir(&config.files())?;
    }

    info!(version = env!("CARGO_PKG_VERSION"), "Starting dnsresolver");

    let services = di::Services::build(&config)?;
    let bind_addr = config.dns_bind_addr()?;

    tokio::select! {
        result = server::start_dns_server(bind_addr, services.dns_handler()) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!(cache_entries = services.cache_len(), "Shutting down");
        }
    }

    Ok(())
}
