// src/services/asset_collector.rs
// DOCUMENTATION: Location x keyword collection pipeline
// PURPOSE: Geocode each location, search every keyword around it and write
// unique places to the output table as they are discovered

use crate::errors::AssetFinderError;
use crate::models::{Location, PlaceRecord, CSV_HEADER};
use crate::services::PlacesApi;
use chrono::Utc;
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Collection statistics
/// DOCUMENTATION: Tracks results of a collection run
#[derive(Debug, Clone, Serialize)]
pub struct CollectionStats {
    /// Locations successfully geocoded and searched
    pub locations_processed: u32,
    /// Total number of API requests made
    pub api_requests: u32,
    /// Total places returned by nearby searches
    pub places_retrieved: u32,
    /// Rows written to the output table (excluding header)
    pub rows_written: u32,
    /// Places skipped because an identical row was already written
    pub duplicates_skipped: u32,
    /// Total run duration in seconds
    pub duration_seconds: u64,
    /// Timestamp when collection started
    pub started_at: String,
    /// Timestamp when collection completed
    pub completed_at: Option<String>,
}

impl CollectionStats {
    /// Create new statistics tracker
    pub fn new() -> Self {
        Self {
            locations_processed: 0,
            api_requests: 0,
            places_retrieved: 0,
            rows_written: 0,
            duplicates_skipped: 0,
            duration_seconds: 0,
            started_at: Utc::now().to_rfc3339(),
            completed_at: None,
        }
    }

    /// Mark collection as completed
    pub fn complete(&mut self, duration: u64) {
        self.duration_seconds = duration;
        self.completed_at = Some(Utc::now().to_rfc3339());
    }
}

impl Default for CollectionStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Deduplicating CSV sink
/// DOCUMENTATION: Writes the header on creation, then each record at most once
pub struct AssetCollector<W: Write> {
    writer: csv::Writer<W>,
    seen: HashSet<PlaceRecord>,
    stats: CollectionStats,
}

impl AssetCollector<File> {
    /// Create (or truncate) the output file and write the header
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, AssetFinderError> {
        let file = File::create(path.as_ref())?;
        log::info!("Writing assets to {}", path.as_ref().display());
        Self::new(file)
    }
}

impl<W: Write> AssetCollector<W> {
    /// Wrap a writer and emit the header row immediately
    /// DOCUMENTATION: Rows end in CRLF
    pub fn new(inner: W) -> Result<Self, AssetFinderError> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(inner);
        writer.write_record(CSV_HEADER)?;
        writer.flush()?;

        Ok(Self {
            writer,
            seen: HashSet::new(),
            stats: CollectionStats::new(),
        })
    }

    /// Write a record unless an identical one was already written
    ///
    /// # Returns
    /// `true` if the record was new and written
    pub fn record(&mut self, record: PlaceRecord) -> Result<bool, AssetFinderError> {
        if self.seen.contains(&record) {
            self.stats.duplicates_skipped += 1;
            log::debug!("Skipping duplicate: {} ({})", record.name, record.category);
            return Ok(false);
        }

        self.writer.write_record(record.as_row())?;
        self.seen.insert(record);
        self.stats.rows_written += 1;
        Ok(true)
    }

    /// Push buffered rows to the underlying writer
    pub fn flush(&mut self) -> Result<(), AssetFinderError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn stats(&self) -> &CollectionStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut CollectionStats {
        &mut self.stats
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W, AssetFinderError> {
        self.writer
            .into_inner()
            .map_err(|e| AssetFinderError::Io(e.into_error()))
    }
}

/// Run the full collection
/// DOCUMENTATION: Main pipeline. Locations are processed in order; for each
/// one every keyword is searched in order and its results are written
/// before the next request is sent.
///
/// Process:
/// 1. Geocode the location zipcode (abort the run if unresolved)
/// 2. For each keyword, run a nearby search around the coordinates
/// 3. Convert results to rows and write the unseen ones
///
/// Rows from earlier locations are already flushed when a later location
/// fails to geocode.
pub async fn collect_assets<A, W>(
    api: &A,
    locations: &[Location],
    keywords: &[&str],
    collector: &mut AssetCollector<W>,
) -> Result<(), AssetFinderError>
where
    A: PlacesApi,
    W: Write,
{
    let start_time = Instant::now();

    log::info!(
        "Starting collection: {} location(s) x {} keyword(s)",
        locations.len(),
        keywords.len()
    );

    for location in locations {
        collector.stats_mut().api_requests += 1;
        let coords = api.geocode(&location.zipcode).await?.ok_or_else(|| {
            log::error!("No coordinates found for zipcode {}", location.zipcode);
            AssetFinderError::GeocodingFailed(location.zipcode.clone())
        })?;

        let radius = location.radius_meters();
        log::info!(
            "Location {} resolved to {} (radius {} m)",
            location,
            coords,
            radius
        );

        for keyword in keywords {
            collector.stats_mut().api_requests += 1;
            let response = api.nearby_search(keyword, &coords, radius).await?;
            let places = response.places();
            collector.stats_mut().places_retrieved += places.len() as u32;

            let mut written = 0;
            for place in places {
                if collector.record(place.to_place_record(keyword))? {
                    written += 1;
                }
            }
            collector.flush()?;

            log::debug!(
                "{} / {}: {} result(s), {} new",
                location.zipcode,
                keyword,
                places.len(),
                written
            );
        }

        collector.stats_mut().locations_processed += 1;
    }

    collector
        .stats_mut()
        .complete(start_time.elapsed().as_secs());

    let stats = collector.stats();
    log::info!(
        "Collection finished: {} rows written, {} duplicates skipped, {} API requests in {}s",
        stats.rows_written,
        stats.duplicates_skipped,
        stats.api_requests,
        stats.duration_seconds
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;
    use crate::services::NearbySearchResponse;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for the Google APIs
    #[derive(Default)]
    struct FakeApi {
        coordinates: HashMap<String, Coordinates>,
        // keyed by "lat,lng|keyword"
        responses: HashMap<String, Value>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeApi {
        fn with_location(mut self, zipcode: &str, lat: f64, lng: f64) -> Self {
            self.coordinates
                .insert(zipcode.to_string(), Coordinates { lat, lng });
            self
        }

        fn with_response(mut self, lat: f64, lng: f64, keyword: &str, body: Value) -> Self {
            let coords = Coordinates { lat, lng };
            self.responses
                .insert(format!("{}|{}", coords, keyword), body);
            self
        }
    }

    impl PlacesApi for FakeApi {
        async fn geocode(&self, zipcode: &str) -> Result<Option<Coordinates>, AssetFinderError> {
            self.calls.borrow_mut().push(format!("geocode {}", zipcode));
            Ok(self.coordinates.get(zipcode).copied())
        }

        async fn nearby_search(
            &self,
            keyword: &str,
            location: &Coordinates,
            _radius_meters: f64,
        ) -> Result<NearbySearchResponse, AssetFinderError> {
            self.calls
                .borrow_mut()
                .push(format!("search {} {}", location, keyword));
            let body = self
                .responses
                .get(&format!("{}|{}", location, keyword))
                .cloned()
                .unwrap_or_else(|| json!({"status": "ZERO_RESULTS", "results": []}));
            Ok(serde_json::from_value(body).unwrap_or_default())
        }
    }

    fn place(name: &str, vicinity: &str, types: &[&str]) -> Value {
        json!({"name": name, "vicinity": vicinity, "types": types})
    }

    fn run(
        api: &FakeApi,
        locations: &[Location],
        keywords: &[&str],
    ) -> (Result<(), AssetFinderError>, String, CollectionStats) {
        let mut collector = AssetCollector::new(Vec::new()).unwrap();
        let result = tokio_test::block_on(collect_assets(api, locations, keywords, &mut collector));
        let stats = collector.stats().clone();
        let bytes = collector.into_inner().unwrap();
        (result, String::from_utf8(bytes).unwrap(), stats)
    }

    #[test]
    fn test_header_always_written() {
        let collector = AssetCollector::new(Vec::new()).unwrap();
        let output = String::from_utf8(collector.into_inner().unwrap()).unwrap();
        assert_eq!(output, "Name,Category,Address,Description\r\n");
    }

    #[test]
    fn test_record_skips_exact_duplicate() {
        let mut collector = AssetCollector::new(Vec::new()).unwrap();
        let record = PlaceRecord::new(Some("Zoo"), "zoo", Some("1 Zoo Rd"), &[]);

        assert!(collector.record(record.clone()).unwrap());
        assert!(!collector.record(record).unwrap());
        assert_eq!(collector.stats().rows_written, 1);
        assert_eq!(collector.stats().duplicates_skipped, 1);
    }

    #[test]
    fn test_identical_entries_from_two_searches_yield_one_row() {
        // Overlapping locations return the same place for the same keyword
        let api = FakeApi::default()
            .with_location("43232", 39.9, -82.8)
            .with_location("43230", 40.0, -82.9)
            .with_response(
                39.9,
                -82.8,
                "park",
                json!({"results": [place("Big Walnut", "Main St", &["park"])]}),
            )
            .with_response(
                40.0,
                -82.9,
                "park",
                json!({"results": [place("Big Walnut", "Main St", &["park"])]}),
            );
        let locations = vec![Location::new("43232", 5), Location::new("43230", 5)];

        let (result, output, stats) = run(&api, &locations, &["park"]);

        assert!(result.is_ok());
        assert_eq!(
            output,
            "Name,Category,Address,Description\r\nBig Walnut,park,Main St,park\r\n"
        );
        assert_eq!(stats.duplicates_skipped, 1);
        assert_eq!(stats.places_retrieved, 2);
    }

    #[test]
    fn test_same_place_under_different_keywords_keeps_both() {
        let api = FakeApi::default()
            .with_location("43232", 39.9, -82.8)
            .with_response(
                39.9,
                -82.8,
                "park",
                json!({"results": [place("Big Walnut", "Main St", &["park"])]}),
            )
            .with_response(
                39.9,
                -82.8,
                "garden",
                json!({"results": [place("Big Walnut", "Main St", &["park"])]}),
            );

        let (_, output, stats) = run(&api, &[Location::new("43232", 1)], &["park", "garden"]);

        assert_eq!(output.lines().count(), 3);
        assert_eq!(stats.rows_written, 2);
    }

    #[test]
    fn test_two_locations_in_processing_order() {
        let api = FakeApi::default()
            .with_location("43232", 39.9, -82.8)
            .with_location("90210", 34.1, -118.4)
            .with_response(
                39.9,
                -82.8,
                "museum",
                json!({"results": [place("COSI", "333 W Broad St", &["museum"])]}),
            )
            .with_response(
                34.1,
                -118.4,
                "museum",
                json!({"results": [place("Getty", "1200 Getty Center Dr", &["museum", "art_gallery"])]}),
            );
        let locations = vec![Location::new("43232", 10), Location::new("90210", 5)];

        let (result, output, stats) = run(&api, &locations, &["museum"]);

        assert!(result.is_ok());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Name,Category,Address,Description",
                "COSI,museum,333 W Broad St,museum",
                "Getty,museum,1200 Getty Center Dr,\"museum, art_gallery\"",
            ]
        );
        assert_eq!(stats.locations_processed, 2);
        assert_eq!(stats.api_requests, 4);
        assert!(stats.completed_at.is_some());
    }

    #[test]
    fn test_missing_results_contributes_nothing() {
        let api = FakeApi::default()
            .with_location("43232", 39.9, -82.8)
            .with_response(39.9, -82.8, "zoo", json!({"status": "INVALID_REQUEST"}))
            .with_response(
                39.9,
                -82.8,
                "library",
                json!({"results": [place("Main Library", "96 S Grant Ave", &["library"])]}),
            );

        let (result, output, _) = run(&api, &[Location::new("43232", 3)], &["zoo", "library"]);

        assert!(result.is_ok());
        assert_eq!(
            output,
            "Name,Category,Address,Description\r\nMain Library,library,96 S Grant Ave,library\r\n"
        );
    }

    #[test]
    fn test_unresolved_zipcode_aborts_without_searching() {
        let api = FakeApi::default()
            .with_location("43232", 39.9, -82.8)
            .with_response(
                39.9,
                -82.8,
                "museum",
                json!({"results": [place("COSI", "333 W Broad St", &["museum"])]}),
            );
        let locations = vec![Location::new("43232", 10), Location::new("00000", 10)];

        let (result, output, stats) = run(&api, &locations, &["museum"]);

        assert!(matches!(
            result,
            Err(AssetFinderError::GeocodingFailed(ref zip)) if zip == "00000"
        ));
        // Rows from the first location stay in the output
        assert_eq!(
            output,
            "Name,Category,Address,Description\r\nCOSI,museum,333 W Broad St,museum\r\n"
        );
        assert_eq!(stats.locations_processed, 1);
        assert!(stats.completed_at.is_none());

        let calls = api.calls.borrow();
        assert_eq!(calls.last().map(String::as_str), Some("geocode 00000"));
        assert_eq!(calls.iter().filter(|c| c.starts_with("search")).count(), 1);
    }

    #[test]
    fn test_empty_geocode_on_first_location_only_header() {
        let api = FakeApi::default();

        let (result, output, _) = run(&api, &[Location::new("99999", 1)], &["park"]);

        assert!(result.is_err());
        assert_eq!(output, "Name,Category,Address,Description\r\n");
        assert_eq!(*api.calls.borrow(), vec!["geocode 99999".to_string()]);
    }
}
