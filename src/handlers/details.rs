// src/handlers/details.rs
// DOCUMENTATION: HTTP handler for place details
// PURPOSE: Fetch details upstream and return photo URLs plus about lines

use crate::errors::ScoutError;
use crate::models::PlaceDetailsResponse;
use crate::services::place_details::{build_about, build_photo_urls};
use crate::services::GoogleMapsClient;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    pub place_id: Option<String>,
}

/// GET /place-details?place_id=..
pub async fn place_details(
    client: web::Data<GoogleMapsClient>,
    query: web::Query<DetailsQuery>,
) -> Result<impl Responder, ScoutError> {
    let place_id = query
        .place_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ScoutError::InvalidArgument("Missing place_id".to_string()))?;

    let details = client
        .place_details(place_id)
        .await
        .map_err(|e| ScoutError::DetailsUnavailable(e.to_string()))?;

    Ok(HttpResponse::Ok().json(PlaceDetailsResponse {
        status: "success",
        photos: build_photo_urls(client.get_ref(), &details),
        about: build_about(&details),
    }))
}

/// Configuration for the place details route
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/place-details", web::get().to(place_details));
}
