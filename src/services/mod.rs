// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod asset_collector;
pub mod google_maps_client;
pub mod keywords;
pub mod places_api;

pub use asset_collector::*;
pub use google_maps_client::*;
pub use keywords::*;
pub use places_api::*;
