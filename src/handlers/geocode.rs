// src/handlers/geocode.rs
// DOCUMENTATION: HTTP handler for reverse geocoding
// PURPOSE: Resolve a coordinate pair to a short display address

use crate::errors::ScoutError;
use crate::models::{Location, ReverseGeocodeResponse};
use crate::services::reverse_geocode::format_address;
use crate::services::GoogleMapsClient;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

/// GET /reverse-geocode?lat=..&lng=..
/// Both coordinates are required here; there is no default point to
/// reverse-geocode on the caller's behalf.
pub async fn reverse_geocode(
    client: web::Data<GoogleMapsClient>,
    query: web::Query<GeocodeQuery>,
) -> Result<impl Responder, ScoutError> {
    let (lat, lng) = match (query.lat.as_deref(), query.lng.as_deref()) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => {
            return Err(ScoutError::InvalidArgument(
                "Missing coordinates".to_string(),
            ))
        }
    };

    let location = Location {
        lat: lat.parse().map_err(|_| ScoutError::InvalidCoordinates)?,
        lng: lng.parse().map_err(|_| ScoutError::InvalidCoordinates)?,
    };

    let results = client
        .reverse_geocode(location)
        .await
        .map_err(|e| ScoutError::GeocodeUnavailable(e.to_string()))?;

    let address = format_address(&results, location)
        .ok_or_else(|| ScoutError::NotFound("Address not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ReverseGeocodeResponse {
        status: "ok",
        address,
    }))
}

/// Configuration for the reverse geocode route
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/reverse-geocode", web::get().to(reverse_geocode));
}
