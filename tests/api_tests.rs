use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use runtrack::models::Coordinates;
use runtrack::services::geocoding::Geocoder;
use runtrack::services::track_service::TrackService;
use runtrack::services::track_synthesizer::TrackSynthesizer;
use runtrack::{AppError, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Geocoding stub so API tests never touch the network
enum StubGeocoder {
    Fixed(Coordinates),
    NotFound,
    NoCredential,
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn resolve(&self, location: &str) -> runtrack::Result<Coordinates> {
        match self {
            StubGeocoder::Fixed(coords) => Ok(*coords),
            StubGeocoder::NotFound => Err(AppError::Geocoding(location.to_string())),
            StubGeocoder::NoCredential => Err(AppError::MissingApiKey),
        }
    }
}

fn setup_test_app(geocoder: StubGeocoder, credential_configured: bool) -> axum::Router {
    let track_service = TrackService::new(Arc::new(geocoder), TrackSynthesizer::new());

    let state = Arc::new(AppState {
        track_service,
        credential_configured,
    });

    axum::Router::new().nest("/api/v1", runtrack::routes::create_router(state))
}

fn paris_app() -> axum::Router {
    let paris = Coordinates::new(48.8566, 2.3522).unwrap();
    setup_test_app(StubGeocoder::Fixed(paris), true)
}

async fn post_tracks(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/tracks")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

#[tokio::test]
async fn test_paris_request_returns_three_tracks() {
    let (status, body) = post_tracks(
        paris_app(),
        json!({"location": "Paris, France", "distance_km": 10.0}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "Paris, France");
    assert_eq!(body["coordinates"], "48.8566,2.3522");
    assert_eq!(body["total_options"], 3);

    let tracks = body["tracks"].as_array().unwrap();
    assert_eq!(tracks.len(), 3);

    for (i, track) in tracks.iter().enumerate() {
        assert_eq!(track["id"], (i + 1) as u64);
        assert_eq!(track["name"], format!("Running Track {}", i + 1));
        assert_eq!(track["distance_km"], 10.0);
        assert_eq!(track["estimated_time_minutes"], 60);
        assert_eq!(track["starting_point"], "48.8566,2.3522");

        let waypoints = track["waypoints"].as_array().unwrap();
        assert!(
            (4..=6).contains(&waypoints.len()),
            "waypoint count {} out of bounds",
            waypoints.len()
        );

        let maps_url = track["google_maps_url"].as_str().unwrap();
        assert!(maps_url.starts_with("https://www.google.com/maps/dir/48.8566,2.3522"));
        assert!(maps_url.ends_with("/48.8566,2.3522"));

        let share_url = track["share_url"].as_str().unwrap();
        assert!(share_url.starts_with("https://maps.google.com/?saddr=48.8566,2.3522"));
        assert!(share_url.contains("waypoints="));
    }
}

#[tokio::test]
async fn test_metadata_comes_from_closed_enumerations() {
    let (status, body) = post_tracks(paris_app(), json!({"location": "Paris, France"})).await;

    assert_eq!(status, StatusCode::OK);
    for track in body["tracks"].as_array().unwrap() {
        let difficulty = track["difficulty"].as_str().unwrap();
        assert!(["Easy", "Moderate", "Challenging"].contains(&difficulty));

        let surface = track["surface"].as_str().unwrap();
        assert!(["Paved", "Mixed", "Trail", "Sidewalk"].contains(&surface));

        let scenery = track["scenery"].as_str().unwrap();
        assert!(["Urban", "Park", "Waterfront", "Residential", "Mixed"].contains(&scenery));
    }
}

#[tokio::test]
async fn test_distance_defaults_to_five_km() {
    let (status, body) = post_tracks(paris_app(), json!({"location": "Paris, France"})).await;

    assert_eq!(status, StatusCode::OK);
    for track in body["tracks"].as_array().unwrap() {
        assert_eq!(track["distance_km"], 5.0);
        assert_eq!(track["estimated_time_minutes"], 30);
    }
}

#[tokio::test]
async fn test_geocoding_failure_returns_error_envelope() {
    let app = setup_test_app(StubGeocoder::NotFound, true);
    let (status, body) = post_tracks(app, json!({"location": "asdfqwerty", "distance_km": 5.0})).await;

    // The tool contract is uniform: failures are an envelope, not an HTTP error
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tracks"].as_array().unwrap().len(), 0);

    let error = body["error"].as_str().unwrap();
    assert!(error.contains("asdfqwerty"));
    assert!(body.get("total_options").is_none());
}

#[tokio::test]
async fn test_missing_credential_returns_error_envelope() {
    let app = setup_test_app(StubGeocoder::NoCredential, false);
    let (status, body) = post_tracks(app, json!({"location": "Paris, France"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tracks"].as_array().unwrap().len(), 0);
    assert!(body["error"].as_str().unwrap().contains("GOOGLE_MAPS_API_KEY"));
}

#[tokio::test]
async fn test_invalid_distance_is_rejected() {
    let (status, _body) = post_tracks(
        paris_app(),
        json!({"location": "Paris, France", "distance_km": -1.0}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_location_is_rejected() {
    let (status, _body) = post_tracks(paris_app(), json!({"location": "  "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_reports_credential_state() {
    let app = setup_test_app(StubGeocoder::NoCredential, false);
    let request = Request::builder()
        .uri("/api/v1/debug/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["geocoding_credential"], "missing");
}
