use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(
        "Google Maps API key not found. Please set GOOGLE_MAPS_API_KEY environment variable."
    )]
    MissingApiKey,

    #[error("Unable to geocode location: {0}")]
    Geocoding(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Error generating tracks: {0}")]
    TrackGeneration(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MissingApiKey => {
                tracing::error!("Geocoding credential missing");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Geocoding service not configured".to_string(),
                )
            }
            AppError::Geocoding(ref location) => {
                tracing::warn!("Geocoding failed for '{}'", location);
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.clone()),
            AppError::TrackGeneration(ref e) => {
                tracing::warn!("Track generation failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
