// src/config/cli.rs
// DOCUMENTATION: Command line arguments
// PURPOSE: Parse search locations and the output path

use crate::errors::AssetFinderError;
use crate::models::Location;
use clap::Parser;
use std::path::PathBuf;

/// Default output table
pub const DEFAULT_OUTPUT: &str = "sample_assets.csv";

/// Find assets near specified locations using Google Places API
#[derive(Parser, Debug)]
#[command(name = "asset-finder")]
#[command(version)]
#[command(about = "Find assets near specified locations using Google Places API", long_about = None)]
pub struct Cli {
    /// Locations in format "zipcode:radius" (e.g., "43232:10"). Can specify multiple.
    #[arg(
        short,
        long,
        num_args = 1..,
        value_parser = parse_location,
        default_value = "43232:10"
    )]
    pub locations: Vec<Location>,

    /// Output CSV file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

/// clap value parser for `zipcode:radius` tokens
fn parse_location(token: &str) -> Result<Location, AssetFinderError> {
    Location::parse(token)
}
