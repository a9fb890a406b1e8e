// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Defines the normalized place listing shape returned to clients

use serde::{Deserialize, Serialize};

/// Fallback search center when the client supplies no coordinates
/// (Lima, Peru).
pub const DEFAULT_LOCATION: Location = Location {
    lat: -12.046374,
    lng: -77.042793,
};

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// One normalized point-of-interest entry returned to the client
/// DOCUMENTATION: Built fresh per request from upstream nearby-search
/// results; never persisted. Within one search response `place_id` is
/// unique across all records.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceRecord {
    /// Place name ("N/A" when upstream omits it)
    pub name: String,

    /// Short street address ("N/A" when upstream omits it)
    pub address: String,

    /// Rating (0-5), absent when the place has none
    pub rating: Option<f32>,

    /// Number of user ratings
    pub total_ratings: u32,

    /// Whether the place is open right now (unknown when upstream
    /// carries no opening-hours data)
    pub open_now: Option<bool>,

    /// Upstream stable identifier; primary dedup key
    pub place_id: Option<String>,

    /// Geographic coordinates
    pub location: Location,

    /// Canonical category label assigned by the resolver
    pub category: String,

    /// Icon URL (passed through verbatim)
    pub icon: Option<String>,

    /// Icon mask base URI (passed through verbatim)
    pub icon_base: Option<String>,

    /// Icon background color (passed through verbatim)
    pub icon_bg: Option<String>,

    /// Price level (0-4: free to very expensive)
    pub price_level: Option<i32>,

    /// Upstream type tags, order as received
    pub types: Vec<String>,
}

impl PlaceRecord {
    /// Identity used for deduplication across sub-queries.
    /// Falls back to name|address when upstream supplies no place_id,
    /// which may under-deduplicate distinct same-named venues.
    pub fn dedup_key(&self) -> String {
        match &self.place_id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => format!("{}|{}", self.name, self.address),
        }
    }
}

/// Body of a successful `GET /search` response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub status: &'static str,
    pub results: Vec<PlaceRecord>,
}

/// Body of a successful `GET /place-details` response
#[derive(Debug, Serialize)]
pub struct PlaceDetailsResponse {
    pub status: &'static str,
    pub photos: Vec<String>,
    pub about: Vec<String>,
}

/// Body of a successful `GET /reverse-geocode` response
#[derive(Debug, Serialize)]
pub struct ReverseGeocodeResponse {
    pub status: &'static str,
    pub address: String,
}
