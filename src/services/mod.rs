// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod category_resolver;
pub mod google_maps_client;
pub mod hours;
pub mod place_details;
pub mod reverse_geocode;
pub mod search_plan;

pub use category_resolver::CategoryResolver;
pub use google_maps_client::{GoogleMapsClient, NearbySearch};
