//! Roster server binary
//!
//! Loads `roster.toml` (if any), applies command-line overrides, installs the
//! tracing subscriber and serves the student API.

use anyhow::Context;
use clap::Parser;
use roster_engine::{RosterConfig, StudentStore, CONFIG_FILE_NAME};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roster-server")]
#[command(about = "Student directory with a top-student query, over HTTP")]
struct Args {
    /// Path to the config file (defaults to ./roster.toml when present)
    #[arg(short, long, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    /// Server host, overrides the config file
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Server port, overrides the config file
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Write a default roster.toml to the config path and exit
    #[arg(long)]
    init_config: bool,
}

fn load_config(args: &Args) -> anyhow::Result<RosterConfig> {
    let path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    let mut config = if args.config.is_some() || Path::new(&path).exists() {
        RosterConfig::from_file(&path)?
    } else {
        RosterConfig::default()
    };

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        RosterConfig::write_default_if_missing(&path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = load_config(&args).context("loading configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        host = %config.host,
        port = config.port,
        first_id = config.first_id,
        "Starting roster server"
    );

    let store = Arc::new(StudentStore::from_config(&config));
    roster_server::serve(&config, store).await?;
    Ok(())
}
