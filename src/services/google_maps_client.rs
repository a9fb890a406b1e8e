// src/services/google_maps_client.rs
// DOCUMENTATION: Google Maps web services client
// PURPOSE: Handle communication with the Places and Geocoding APIs

use crate::models::Location;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// Failure talking to the upstream Maps API
/// DOCUMENTATION: Low-level error surfaced by this client. Callers map it
/// into the HTTP-facing taxonomy; the detail text is for logs only.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API quota exceeded")]
    QuotaExceeded,

    #[error("API status {status}: {message}")]
    Api { status: String, message: String },
}

/// Seam over the upstream nearby-search capability so the category
/// resolver can run against an in-memory fake in tests.
#[async_trait]
pub trait NearbySearch: Send + Sync {
    async fn nearby_search(
        &self,
        location: Location,
        radius: u32,
        keyword: &str,
        place_type: Option<&str>,
    ) -> Result<Vec<RawPlace>, UpstreamError>;
}

/// Google Maps API client
/// DOCUMENTATION: Handles authentication and API calls; constructed once
/// at process start and shared across requests.
pub struct GoogleMapsClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Maps API key
    api_key: String,
    /// Base URL for the Places API
    places_base_url: String,
    /// Base URL for the Geocoding API
    geocode_base_url: String,
}

/// Response from Places Nearby Search
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    #[serde(default)]
    pub results: Vec<RawPlace>,
    pub status: String,
    pub error_message: Option<String>,
}

/// Individual place as returned by Nearby Search
/// DOCUMENTATION: Every field is optional because upstream omits fields
/// freely; normalization into PlaceRecord happens in the resolver.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlace {
    pub name: Option<String>,
    /// Short address from Nearby Search
    pub vicinity: Option<String>,
    pub rating: Option<f32>,
    pub user_ratings_total: Option<u32>,
    pub opening_hours: Option<RawOpeningHours>,
    pub place_id: Option<String>,
    pub geometry: Option<RawGeometry>,
    pub icon: Option<String>,
    pub icon_mask_base_uri: Option<String>,
    pub icon_background_color: Option<String>,
    pub price_level: Option<i32>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGeometry {
    #[serde(default)]
    pub location: Location,
}

/// Opening hours metadata
#[derive(Debug, Clone, Deserialize)]
pub struct RawOpeningHours {
    pub open_now: Option<bool>,
    pub weekday_text: Option<Vec<String>>,
}

/// Place Details result, restricted to the fields the details endpoint
/// actually requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetails {
    pub photos: Option<Vec<RawPhoto>>,
    pub editorial_summary: Option<EditorialSummary>,
    pub price_level: Option<i32>,
    pub opening_hours: Option<RawOpeningHours>,
    pub website: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub rating: Option<f32>,
    pub user_ratings_total: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPhoto {
    pub photo_reference: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorialSummary {
    pub overview: Option<String>,
}

/// One result from the reverse-geocoding API
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
    status: String,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    result: Option<PlaceDetails>,
    status: String,
    error_message: Option<String>,
}

impl GoogleMapsClient {
    /// Create a new client with a bounded per-request timeout
    pub fn new(api_key: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            places_base_url: "https://maps.googleapis.com/maps/api/place".to_string(),
            geocode_base_url: "https://maps.googleapis.com/maps/api/geocode".to_string(),
        }
    }

    /// Build a photo URL from an upstream photo reference
    /// DOCUMENTATION: Templated base URL + maxwidth + reference + key,
    /// usable directly in img tags.
    pub fn photo_url(&self, photo_reference: &str, max_width: u32) -> String {
        format!(
            "{}/photo?maxwidth={}&photoreference={}&key={}",
            self.places_base_url, max_width, photo_reference, self.api_key
        )
    }

    /// Retrieve place details by place_id
    /// DOCUMENTATION: Requests only the fields the details endpoint
    /// surfaces (photos, editorial summary, price level, hours, website,
    /// phone, rating).
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, UpstreamError> {
        let url = format!("{}/details/json", self.places_base_url);

        let params = [
            ("place_id", place_id),
            ("key", &self.api_key),
            (
                "fields",
                "photo,editorial_summary,price_level,opening_hours,website,\
                 formatted_phone_number,rating,user_ratings_total",
            ),
        ];

        log::debug!("Place details lookup: place_id={}", place_id);

        let response = self.client.get(&url).query(&params).send().await?;
        let api_response: DetailsResponse = response.error_for_status()?.json().await?;

        match api_response.status.as_str() {
            "OK" => Ok(api_response.result.unwrap_or_default()),
            "OVER_QUERY_LIMIT" => Err(UpstreamError::QuotaExceeded),
            status => Err(UpstreamError::Api {
                status: status.to_string(),
                message: api_response.error_message.unwrap_or_default(),
            }),
        }
    }

    /// Reverse-geocode a coordinate pair
    /// DOCUMENTATION: Returns upstream results in order; an empty vector
    /// means upstream found no address for the point.
    pub async fn reverse_geocode(
        &self,
        location: Location,
    ) -> Result<Vec<GeocodeResult>, UpstreamError> {
        let url = format!("{}/json", self.geocode_base_url);

        let params = [
            ("latlng", format!("{},{}", location.lat, location.lng)),
            ("key", self.api_key.clone()),
        ];

        log::debug!(
            "Reverse geocode: lat={}, lng={}",
            location.lat,
            location.lng
        );

        let response = self.client.get(&url).query(&params).send().await?;
        let api_response: GeocodeResponse = response.error_for_status()?.json().await?;

        match api_response.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(api_response.results),
            "OVER_QUERY_LIMIT" => Err(UpstreamError::QuotaExceeded),
            status => Err(UpstreamError::Api {
                status: status.to_string(),
                message: api_response.error_message.unwrap_or_default(),
            }),
        }
    }
}

#[async_trait]
impl NearbySearch for GoogleMapsClient {
    /// Perform a nearby search around a geographic point
    async fn nearby_search(
        &self,
        location: Location,
        radius: u32,
        keyword: &str,
        place_type: Option<&str>,
    ) -> Result<Vec<RawPlace>, UpstreamError> {
        let url = format!("{}/nearbysearch/json", self.places_base_url);

        let mut params = HashMap::new();
        params.insert("location", format!("{},{}", location.lat, location.lng));
        params.insert("radius", radius.to_string());
        params.insert("keyword", keyword.to_string());
        params.insert("key", self.api_key.clone());

        if let Some(pt) = place_type {
            params.insert("type", pt.to_string());
        }

        log::debug!(
            "Nearby search: lat={}, lng={}, radius={}, keyword={}",
            location.lat,
            location.lng,
            radius,
            keyword
        );

        let response = self.client.get(&url).query(&params).send().await?;
        let api_response: NearbySearchResponse = response.error_for_status()?.json().await?;

        match api_response.status.as_str() {
            "OK" | "ZERO_RESULTS" => {
                log::info!(
                    "Nearby search '{}' returned {} results",
                    keyword,
                    api_response.results.len()
                );
                Ok(api_response.results)
            }
            "OVER_QUERY_LIMIT" => {
                log::error!("Maps API quota exceeded");
                Err(UpstreamError::QuotaExceeded)
            }
            status => Err(UpstreamError::Api {
                status: status.to_string(),
                message: api_response
                    .error_message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            }),
        }
    }
}
