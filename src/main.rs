//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ipcheck` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ipcheck::initialization::{init_client, init_logger_with};
use ipcheck::{display, Config, IpResolver};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let resolver = IpResolver::new(client, &config).context("Invalid endpoint configuration")?;

    match resolver.resolve().await {
        Ok(info) => {
            println!("IP:          {}", display::value_line(&info.ip));
            println!("Type:        {}", display::value_line(&info.ip_type));
            println!("Location:    {}", display::location_line(&info));
            println!("Continent:   {}", display::continent_line(&info));
            println!("Timezone:    {}", display::timezone_line(&info));
            println!("Org:         {}", display::value_line(&info.org));
            println!("ISP:         {}", display::value_line(&info.isp));
            println!("Coordinates: {}", display::coordinates_line(&info));
            if let Some(map_url) = display::map_embed_url(&info) {
                println!("Map:         {}", map_url);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("ipcheck error: {e}");
            process::exit(1);
        }
    }
}
