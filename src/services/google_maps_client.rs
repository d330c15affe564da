// src/services/google_maps_client.rs
// DOCUMENTATION: Google Maps API client
// PURPOSE: Geocode zipcodes and run nearby searches against Google Maps

use crate::config::Config;
use crate::errors::AssetFinderError;
use crate::models::{Coordinates, PlaceRecord};
use crate::services::PlacesApi;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Google Maps API client
/// DOCUMENTATION: Handles authentication and calls to the Geocoding and
/// Places Nearby Search endpoints
pub struct GoogleMapsClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Maps API key
    api_key: String,
    /// Base URL for the Geocoding API
    geocode_base_url: String,
    /// Base URL for the Places API
    places_base_url: String,
}

/// Response from the Geocoding API
#[derive(Debug, Default, Deserialize)]
pub struct GeocodeResponse {
    /// Candidate matches, best first
    #[serde(default)]
    pub results: Option<Vec<GeocodeResult>>,
    /// Status of the API call
    pub status: Option<String>,
    /// Error message (if status is not OK)
    pub error_message: Option<String>,
}

/// Single geocoding match
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: GoogleGeometry,
}

/// Geographic location from Google
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleGeometry {
    pub location: GoogleLocation,
}

/// Coordinates from Google
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GoogleLocation {
    pub lat: f64,
    pub lng: f64,
}

impl GeocodeResponse {
    /// Coordinates of the first match, if any
    pub fn first_coordinates(&self) -> Option<Coordinates> {
        self.results
            .as_ref()
            .and_then(|results| results.first())
            .map(|result| Coordinates {
                lat: result.geometry.location.lat,
                lng: result.geometry.location.lng,
            })
    }
}

/// Response from Google Places Nearby Search
/// DOCUMENTATION: Every field is optional; a missing `results` array means
/// the search contributed nothing. Elements are decoded one by one, so a
/// malformed place never hides its siblings.
#[derive(Debug, Default, Deserialize)]
pub struct NearbySearchResponse {
    /// Results array from API
    #[serde(default, deserialize_with = "lenient_places")]
    pub results: Option<Vec<NearbyPlace>>,
    /// Status of the API call
    pub status: Option<String>,
    /// Next page token (never followed)
    pub next_page_token: Option<String>,
    /// Error message (if status is not OK)
    pub error_message: Option<String>,
}

impl NearbySearchResponse {
    /// Places on this page, empty when `results` was absent
    pub fn places(&self) -> &[NearbyPlace] {
        self.results.as_deref().unwrap_or(&[])
    }
}

/// Individual place from a nearby search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearbyPlace {
    /// Place name
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Short address
    #[serde(default, deserialize_with = "lenient")]
    pub vicinity: Option<String>,
    /// Place types (e.g., ["museum", "point_of_interest"])
    #[serde(default, deserialize_with = "lenient")]
    pub types: Option<Vec<String>>,
}

/// Decode a field, treating a value of the wrong type as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode `results` element by element, dropping entries that are not places
fn lenient_places<'de, D>(deserializer: D) -> Result<Option<Vec<NearbyPlace>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(None),
    };

    let places = items
        .into_iter()
        .filter_map(|item| {
            serde_json::from_value(item)
                .map_err(|e| log::debug!("Skipping malformed place: {}", e))
                .ok()
        })
        .collect();

    Ok(Some(places))
}

impl NearbyPlace {
    /// Convert to an output row labelled with the search keyword
    pub fn to_place_record(&self, keyword: &str) -> PlaceRecord {
        PlaceRecord::new(
            self.name.as_deref(),
            keyword,
            self.vicinity.as_deref(),
            self.types.as_deref().unwrap_or(&[]),
        )
    }
}

impl GoogleMapsClient {
    /// Create client from application configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.google_maps_api_key.clone(),
            geocode_base_url: config.geocode_base_url.trim_end_matches('/').to_string(),
            places_base_url: config.places_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Issue a GET request and decode the JSON body
    /// DOCUMENTATION: Transport failures, HTTP errors and non-JSON bodies
    /// are fatal; JSON of an unexpected shape decodes to `T::default()`
    async fn get_json<T>(&self, url: &str, params: &[(&str, String)]) -> Result<T, AssetFinderError>
    where
        T: DeserializeOwned + Default,
    {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Google Maps API request failed: {}", e);
                AssetFinderError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Google Maps API error {}: {}", status, body);
            return Err(AssetFinderError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            log::error!("Failed to parse Google Maps response: {}", e);
            AssetFinderError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        Ok(decode_or_default(body))
    }
}

/// Decode a JSON body, treating an unexpected shape as empty
fn decode_or_default<T>(body: Value) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_value(body).unwrap_or_else(|e| {
        log::debug!("Unexpected Google Maps response shape: {}", e);
        T::default()
    })
}

/// Warn about statuses other than OK / ZERO_RESULTS
fn log_status(endpoint: &str, status: Option<&str>, error_message: Option<&str>) {
    match status {
        None | Some("OK") | Some("ZERO_RESULTS") => {}
        Some(other) => log::warn!(
            "Google {} returned status {}: {}",
            endpoint,
            other,
            error_message.unwrap_or("no error message")
        ),
    }
}

impl PlacesApi for GoogleMapsClient {
    /// Geocode a zipcode
    /// DOCUMENTATION: Sends the zipcode as a free-text address
    async fn geocode(&self, zipcode: &str) -> Result<Option<Coordinates>, AssetFinderError> {
        let url = format!("{}/json", self.geocode_base_url);
        let params = [
            ("address", zipcode.to_string()),
            ("key", self.api_key.clone()),
        ];

        log::debug!("Google geocode lookup: address={}", zipcode);

        let response: GeocodeResponse = self.get_json(&url, &params).await?;
        log_status(
            "geocoding",
            response.status.as_deref(),
            response.error_message.as_deref(),
        );

        Ok(response.first_coordinates())
    }

    /// Perform nearby search for places
    ///
    /// # Arguments
    /// * `keyword` - Keyword filter (e.g., "museum")
    /// * `location` - Search center
    /// * `radius_meters` - Search radius in meters
    async fn nearby_search(
        &self,
        keyword: &str,
        location: &Coordinates,
        radius_meters: f64,
    ) -> Result<NearbySearchResponse, AssetFinderError> {
        let url = format!("{}/nearbysearch/json", self.places_base_url);
        let params = [
            ("key", self.api_key.clone()),
            ("location", location.to_string()),
            ("radius", radius_meters.to_string()),
            ("keyword", keyword.to_string()),
        ];

        log::debug!(
            "Google Places nearby search: keyword={}, location={}, radius={}",
            keyword,
            location,
            radius_meters
        );

        let response: NearbySearchResponse = self.get_json(&url, &params).await?;
        log_status(
            "nearby search",
            response.status.as_deref(),
            response.error_message.as_deref(),
        );

        if response.next_page_token.is_some() {
            log::debug!(
                "Nearby search for '{}' has more results; only the first page is used",
                keyword
            );
        }

        Ok(response)
    }
}
