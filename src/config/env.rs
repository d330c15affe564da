// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use crate::errors::AssetFinderError;
use dotenv::dotenv;
use std::env;

/// Default Google Geocoding endpoint
pub const DEFAULT_GEOCODE_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode";

/// Default Google Places endpoint
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Holds everything a run needs besides the CLI arguments
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Maps API key (geocoding + places)
    pub google_maps_api_key: String,

    /// Base URL for the geocoding API
    pub geocode_base_url: String,

    /// Base URL for the places API
    pub places_base_url: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            google_maps_api_key: lookup("GOOGLE_MAPS_API_KEY").unwrap_or_default(),

            geocode_base_url: lookup("GOOGLE_GEOCODE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEOCODE_BASE_URL.to_string()),

            places_base_url: lookup("GOOGLE_PLACES_BASE_URL")
                .unwrap_or_else(|| DEFAULT_PLACES_BASE_URL.to_string()),

            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: A run cannot start without an API key
    pub fn validate(&self) -> Result<(), AssetFinderError> {
        if self.google_maps_api_key.trim().is_empty() {
            return Err(AssetFinderError::MissingApiKey);
        }

        Ok(())
    }
}
