// src/services/places_api.rs
// DOCUMENTATION: Abstraction over the upstream geocoding and places APIs
// PURPOSE: Lets the collector run against Google or an in-memory fake

use crate::errors::AssetFinderError;
use crate::models::Coordinates;
use crate::services::NearbySearchResponse;

/// Upstream calls the collector depends on
/// DOCUMENTATION: Calls are awaited one at a time by the caller
#[allow(async_fn_in_trait)]
pub trait PlacesApi {
    /// Resolve a postal code to coordinates
    ///
    /// # Returns
    /// `None` when the geocoder returned no result for the zipcode
    async fn geocode(&self, zipcode: &str) -> Result<Option<Coordinates>, AssetFinderError>;

    /// Search for places matching `keyword` around `location`
    ///
    /// Only the first page of results is returned.
    async fn nearby_search(
        &self,
        keyword: &str,
        location: &Coordinates,
        radius_meters: f64,
    ) -> Result<NearbySearchResponse, AssetFinderError>;
}
