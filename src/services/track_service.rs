use crate::error::Result;
use crate::models::TrackResponse;
use crate::services::geocoding::Geocoder;
use crate::services::track_synthesizer::TrackSynthesizer;
use std::sync::Arc;

/// The single user-facing operation: resolve a location, synthesize track
/// options around it. Every failure path collapses into the uniform failure
/// envelope; callers never see an error value, only the response shape.
pub struct TrackService {
    geocoder: Arc<dyn Geocoder>,
    synthesizer: TrackSynthesizer,
}

impl TrackService {
    pub fn new(geocoder: Arc<dyn Geocoder>, synthesizer: TrackSynthesizer) -> Self {
        TrackService {
            geocoder,
            synthesizer,
        }
    }

    pub async fn generate_tracks(&self, location: &str, distance_km: f64) -> TrackResponse {
        match self.try_generate(location, distance_km).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    location,
                    distance_km,
                    error = %e,
                    "Track generation failed for '{}': {}",
                    location, e
                );
                TrackResponse::failure(e.to_string())
            }
        }
    }

    async fn try_generate(&self, location: &str, distance_km: f64) -> Result<TrackResponse> {
        let start = self.geocoder.resolve(location).await?;

        let tracks = self.synthesizer.synthesize(start, distance_km);

        tracing::info!(
            location,
            lat = start.lat,
            lng = start.lng,
            options = tracks.len(),
            "Generated {} track options around ({:.4}, {:.4})",
            tracks.len(), start.lat, start.lng
        );

        Ok(TrackResponse::success(location.to_string(), start, tracks))
    }
}
