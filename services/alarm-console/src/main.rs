//! Alarm console CLI
//!
//! Command-line interface for the service that hosts the alarm console.

use std::path::PathBuf;

use alarm_console::{load_config, Config, ConsoleBuilder};
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "alarm-console")]
#[command(about = "Serves the alarm console page shell and its wasm bundle")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Base URL of the alarm API (overrides config file)
    #[arg(long, env = "ALARM_API_BASE")]
    api_base: Option<String>,

    /// Directory holding the compiled frontend (overrides config file)
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, api_base={:?}, site_root={:?}, log_level={:?}",
        args.config,
        args.port,
        args.api_base,
        args.site_root,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(api_base) = args.api_base {
        config.api.base_url = api_base;
    }
    if let Some(site_root) = args.site_root {
        config.site.root = site_root;
    }

    tracing::info!("Starting alarm console");
    ConsoleBuilder::new(config).build().await?.start().await?;

    Ok(())
}
