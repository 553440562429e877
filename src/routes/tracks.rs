use crate::error::{AppError, Result};
use crate::models::track::{TrackRequest, TrackResponse};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /tracks
/// Generate running track options around a geocoded location
pub async fn generate_tracks(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TrackRequest>,
) -> Result<Json<TrackResponse>> {
    // Validate request
    request.validate().map_err(AppError::InvalidRequest)?;

    tracing::info!(
        location = %request.location,
        distance_km = request.distance_km,
        "Track request: '{}', {:.1}km",
        request.location, request.distance_km
    );

    let response = state
        .track_service
        .generate_tracks(&request.location, request.distance_km)
        .await;

    Ok(Json(response))
}
