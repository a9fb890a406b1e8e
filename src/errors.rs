// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to the HTTP status code and JSON body
/// returned to the client. Upstream failure variants carry the underlying
/// detail for logging, but the Display message is the only text a client
/// ever sees.
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Invalid coordinates provided")]
    InvalidCoordinates,

    #[error("Search service temporarily unavailable")]
    SearchUnavailable(String),

    #[error("Failed to load place details")]
    DetailsUnavailable(String),

    #[error("Geocoding service unavailable")]
    GeocodeUnavailable(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    #[allow(dead_code)]
    Internal,
}

/// Convert ScoutError to HTTP response
/// DOCUMENTATION: Bodies are always `{"status":"error","message":...}`.
/// Upstream error details are logged here and never leaked to the client.
impl ResponseError for ScoutError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ScoutError::SearchUnavailable(detail) => {
                log::error!("Search upstream failure: {}", detail);
            }
            ScoutError::DetailsUnavailable(detail) => {
                log::error!("Place details upstream failure: {}", detail);
            }
            ScoutError::GeocodeUnavailable(detail) => {
                log::error!("Reverse geocode upstream failure: {}", detail);
            }
            _ => {}
        }

        let body = json!({
            "status": "error",
            "message": self.to_string()
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ScoutError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ScoutError::InvalidCoordinates => StatusCode::BAD_REQUEST,
            ScoutError::SearchUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ScoutError::DetailsUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ScoutError::GeocodeUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ScoutError::NotFound(_) => StatusCode::NOT_FOUND,
            ScoutError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
