//! Broker Dashboard Server
//!
//! Serves the built dashboard front end.
//!
//! Run with: cargo run --bin dashboard-serve -- --http-dir dashboard-ui/dist
//!
//! # Configuration
//!
//! Settings come from (later wins): defaults, `config.toml`, environment
//! (`DASHBOARD_*`), command-line flags.

use anyhow::Context;
use broker_dashboard::config::{generate_default_config, Config, LoggingConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dashboard-serve")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the broker monitoring dashboard")]
struct Cli {
    /// Config file (default: search standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory containing the built dashboard
    #[arg(long)]
    http_dir: Option<PathBuf>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    // The configured subscriber depends on the config itself, so loading
    // logs through a stderr bootstrap subscriber.
    let config = tracing::subscriber::with_default(bootstrap_subscriber(std::io::stderr), || {
        load_config(&cli)
    })?;

    init_logging(&config.logging);

    tracing::info!("Starting dashboard server v{}", env!("CARGO_PKG_VERSION"));

    broker_dashboard::serve(&config.server)
        .await
        .with_context(|| format!("serving {:?}", config.server.http_dir))?;

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(dir) = &cli.http_dir {
        config.server.http_dir = dir.clone();
    }

    Ok(config)
}

fn bootstrap_subscriber<W>(writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("broker_dashboard=info"))
        .with_writer(writer)
        .finish()
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("broker_dashboard={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
