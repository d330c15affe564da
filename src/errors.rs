// src/errors.rs
// DOCUMENTATION: Custom error types for the asset finder
// PURPOSE: Centralized error handling for configuration, API calls and output

use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure that can abort a collection run
#[derive(Error, Debug)]
pub enum AssetFinderError {
    #[error("GOOGLE_MAPS_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("Location must be in format 'zipcode:radius' (e.g., '43232:10'), got '{0}'")]
    InvalidLocation(String),

    #[error("Invalid ZIP code or unable to fetch coordinates for {0}")]
    GeocodingFailed(String),

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
