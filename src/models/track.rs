use crate::constants::DEFAULT_DISTANCE_KM;
use crate::models::Coordinates;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Moderate, Difficulty::Challenging];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Surface {
    Paved,
    Mixed,
    Trail,
    Sidewalk,
}

impl Surface {
    pub const ALL: [Surface; 4] = [Surface::Paved, Surface::Mixed, Surface::Trail, Surface::Sidewalk];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Scenery {
    Urban,
    Park,
    Waterfront,
    Residential,
    Mixed,
}

impl Scenery {
    pub const ALL: [Scenery; 5] = [
        Scenery::Urban,
        Scenery::Park,
        Scenery::Waterfront,
        Scenery::Residential,
        Scenery::Mixed,
    ];
}

/// One synthesized track option. Immutable once returned; identity does not
/// outlive the response it was generated for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: u32,
    pub name: String,
    pub distance_km: f64,
    pub starting_point: String,
    pub waypoints: Vec<String>,
    pub estimated_time_minutes: u32,
    pub difficulty: Difficulty,
    pub surface: Surface,
    pub scenery: Scenery,
    pub google_maps_url: String,
    pub share_url: String,
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct TrackRequest {
    pub location: String,
    #[serde(default = "default_distance_km")]
    pub distance_km: f64,
}

fn default_distance_km() -> f64 {
    DEFAULT_DISTANCE_KM
}

impl TrackRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.location.trim().is_empty() {
            return Err("location must not be empty".to_string());
        }
        if !self.distance_km.is_finite() || self.distance_km <= 0.0 {
            return Err("distance_km must be a positive number".to_string());
        }
        Ok(())
    }
}

/// Uniform response envelope: success carries the resolved coordinate and
/// track options, failure carries a message and an empty track list. Either
/// way the caller gets the same shape back, never an error value.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TrackResponse {
    Success {
        location: String,
        coordinates: String,
        tracks: Vec<Track>,
        total_options: usize,
    },
    Failure {
        error: String,
        tracks: Vec<Track>,
    },
}

impl TrackResponse {
    pub fn success(location: String, start: Coordinates, tracks: Vec<Track>) -> Self {
        let total_options = tracks.len();
        TrackResponse::Success {
            location,
            coordinates: start.to_string(),
            tracks,
            total_options,
        }
    }

    pub fn failure(error: String) -> Self {
        TrackResponse::Failure {
            error,
            tracks: Vec::new(),
        }
    }

    pub fn tracks(&self) -> &[Track] {
        match self {
            TrackResponse::Success { tracks, .. } => tracks,
            TrackResponse::Failure { tracks, .. } => tracks,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            TrackResponse::Success { .. } => None,
            TrackResponse::Failure { error, .. } => Some(error),
        }
    }
}
