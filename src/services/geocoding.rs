use crate::error::{AppError, Result};
use crate::models::Coordinates;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const GOOGLE_MAPS_BASE_URL: &str = "https://maps.googleapis.com";

/// Narrow geocoding seam: resolve free-text location to a coordinate.
/// Track synthesis is tested against stub implementations of this trait.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, location: &str) -> Result<Coordinates>;
}

#[derive(Clone)]
pub struct GoogleMapsGeocoder {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GoogleMapsGeocoder {
    pub fn new(api_key: Option<String>) -> Self {
        GoogleMapsGeocoder {
            client: Client::new(),
            api_key,
            base_url: GOOGLE_MAPS_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        GoogleMapsGeocoder {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl Geocoder for GoogleMapsGeocoder {
    async fn resolve(&self, location: &str) -> Result<Coordinates> {
        let api_key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;

        let url = format!("{}/maps/api/geocode/json", self.base_url);

        tracing::debug!(location, "Geocoding request for '{}'", location);

        let response = self
            .client
            .get(&url)
            .query(&[("address", location), ("key", api_key)])
            .send()
            .await
            .map_err(|e| AppError::TrackGeneration(format!("geocoding request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(
                status = %status,
                location,
                "Geocoding HTTP error {} for '{}'",
                status, location
            );
            return Err(AppError::Geocoding(location.to_string()));
        }

        let data: GeocodeApiResponse = response.json().await.map_err(|e| {
            AppError::TrackGeneration(format!("failed to parse geocoding response: {}", e))
        })?;

        coordinates_from_response(location, &data)
    }
}

fn coordinates_from_response(location: &str, data: &GeocodeApiResponse) -> Result<Coordinates> {
    if data.status != "OK" || data.results.is_empty() {
        tracing::warn!(
            status = %data.status,
            location,
            "Geocoding returned status {} with {} results for '{}'",
            data.status, data.results.len(), location
        );
        return Err(AppError::Geocoding(location.to_string()));
    }

    let resolved = &data.results[0].geometry.location;
    Coordinates::new(resolved.lat, resolved.lng)
        .map_err(|_| AppError::Geocoding(location.to_string()))
}

// Google Geocoding API response types

#[derive(Debug, Deserialize)]
struct GeocodeApiResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    location: GeocodeLocation,
}

#[derive(Debug, Deserialize)]
struct GeocodeLocation {
    lat: f64,
    lng: f64,
}
