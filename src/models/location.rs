// src/models/location.rs
// DOCUMENTATION: Search origins and resolved coordinates
// PURPOSE: Location configured on the command line and its geocoded center

use crate::errors::AssetFinderError;
use std::fmt;

/// Meters per statute mile
pub const METERS_PER_MILE: f64 = 1609.34;

/// A configured search origin
/// DOCUMENTATION: Postal code plus search radius, parsed from `zipcode:radius`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Postal code exactly as given (leading zeros preserved)
    pub zipcode: String,
    /// Search radius in miles
    pub radius_miles: u32,
}

impl Location {
    pub fn new(zipcode: impl Into<String>, radius_miles: u32) -> Self {
        Self {
            zipcode: zipcode.into(),
            radius_miles,
        }
    }

    /// Parse a `zipcode:radius` token
    /// DOCUMENTATION: Both halves must be unsigned integers; signs are
    /// refused, so negative radii and `+43232` are usage errors
    ///
    /// # Examples
    /// `"43232:10"` -> zipcode "43232", radius 10 miles
    pub fn parse(token: &str) -> Result<Self, AssetFinderError> {
        let invalid = || AssetFinderError::InvalidLocation(token.to_string());

        let (zipcode, radius) = token.split_once(':').ok_or_else(invalid)?;
        let zipcode = zipcode.trim();
        let radius = radius.trim();

        if zipcode.is_empty() || !zipcode.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        zipcode.parse::<u64>().map_err(|_| invalid())?;

        if radius.is_empty() || !radius.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let radius_miles = radius.parse::<u32>().map_err(|_| invalid())?;

        Ok(Self::new(zipcode, radius_miles))
    }

    /// Search radius converted to meters for the places API
    pub fn radius_meters(&self) -> f64 {
        f64::from(self.radius_miles) * METERS_PER_MILE
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.zipcode, self.radius_miles)
    }
}

/// Geographic center resolved by the geocoding API
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for Coordinates {
    /// Rendered as the `lat,lng` pair the places API expects
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
