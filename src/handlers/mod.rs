// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod details;
pub mod geocode;
pub mod health;
pub mod search;

pub use details::config as details_config;
pub use geocode::config as geocode_config;
pub use health::config as health_config;
pub use search::config as search_config;

use actix_web::HttpResponse;
use serde_json::json;

/// Fallback for unknown routes, keeps error bodies JSON like everything else
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "status": "error",
        "message": "Endpoint not found"
    }))
}
