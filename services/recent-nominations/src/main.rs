//! Recent nominations CLI
//!
//! Serves the recent nominations dashboard, or prints the cards once.

use std::path::PathBuf;

use clap::Parser;
use recent_nominations::{load_config, render_once, run, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "recent-nominations")]
#[command(about = "Recent nominations dashboard for the HR admin console")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dashboard port (overrides config file)
    #[arg(long)]
    dashboard_port: Option<u16>,

    /// Print the recent nominations once and exit
    #[arg(long)]
    once: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, dashboard_port={:?}, once={}, log_level={:?}",
        args.config,
        args.dashboard_port,
        args.once,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    config.resolve_secrets()?;
    config.validate()?;

    if let Some(dashboard_port) = args.dashboard_port {
        config.dashboard.port = dashboard_port;
    }

    if args.once {
        println!("Recent Nominations");
        for card in render_once(&config).await? {
            println!(
                "- {} | By: {} | {} | {} ({})",
                card.name, card.nominated_by, card.created_on, card.status_label, card.status_color
            );
        }
        return Ok(());
    }

    tracing::info!("Starting recent nominations service");
    run(config).await?;

    Ok(())
}
