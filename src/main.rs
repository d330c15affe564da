// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Load config, parse arguments, and run the asset collection

mod config;
mod errors;
mod models;
mod services;

use clap::Parser;
use config::{Cli, Config};
use services::{collect_assets, AssetCollector, GoogleMapsClient, DEFAULT_KEYWORDS};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Parse arguments (usage errors exit here, before any network call)
    let cli = Cli::parse();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &config.log_level);
    }
    env_logger::init();

    config.validate()?;

    log::info!("Starting asset-finder...");
    log::info!(
        "Locations: {}",
        cli.locations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    // 4. Open output and run the searches
    let client = GoogleMapsClient::from_config(&config);
    let mut collector = AssetCollector::create(&cli.output)?;

    collect_assets(&client, &cli.locations, DEFAULT_KEYWORDS, &mut collector).await?;

    log::debug!("Run stats: {}", serde_json::to_string(collector.stats())?);
    collector.into_inner()?.sync_all()?;

    println!("Results saved to {}", cli.output.display());
    Ok(())
}
