// src/handlers/search.rs
// DOCUMENTATION: HTTP handler for nearby search
// PURPOSE: Parse query parameters, run the category resolver, return results

use crate::config::Config;
use crate::errors::ScoutError;
use crate::models::{Location, SearchResponse, DEFAULT_LOCATION};
use crate::services::{CategoryResolver, GoogleMapsClient};
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

/// Raw query string for `GET /search`
/// DOCUMENTATION: Coordinates arrive as text so a missing value can fall
/// back to the default location while a malformed one is a 400.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub keyword: Option<String>,
}

/// Parse optional coordinate text, defaulting absent values and rejecting
/// malformed ones.
pub(crate) fn parse_location(
    lat: Option<&str>,
    lng: Option<&str>,
) -> Result<Location, ScoutError> {
    let lat = match lat {
        Some(raw) => raw.parse().map_err(|_| ScoutError::InvalidCoordinates)?,
        None => DEFAULT_LOCATION.lat,
    };
    let lng = match lng {
        Some(raw) => raw.parse().map_err(|_| ScoutError::InvalidCoordinates)?,
        None => DEFAULT_LOCATION.lng,
    };
    Ok(Location { lat, lng })
}

/// GET /search?lat=..&lng=..&keyword=..
pub async fn search(
    client: web::Data<GoogleMapsClient>,
    config: web::Data<Config>,
    query: web::Query<SearchQuery>,
) -> Result<impl Responder, ScoutError> {
    let location = parse_location(query.lat.as_deref(), query.lng.as_deref())?;

    let keyword = query
        .keyword
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| ScoutError::InvalidArgument("Keyword is required".to_string()))?;

    let resolver = CategoryResolver::new(client.get_ref(), config.search_partial_results);
    let results = resolver.resolve(keyword, location).await?;

    Ok(HttpResponse::Ok().json(SearchResponse {
        status: "success",
        results,
    }))
}

/// Configuration for the search route
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/search", web::get().to(search));
}
