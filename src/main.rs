use axum::Router;
use runtrack::config::Config;
use runtrack::services::geocoding::GoogleMapsGeocoder;
use runtrack::services::track_service::TrackService;
use runtrack::services::track_synthesizer::TrackSynthesizer;
use runtrack::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "runtrack=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting RunTrack API server");

    let credential_configured = config.google_maps_api_key.is_some();
    if !credential_configured {
        tracing::warn!(
            "GOOGLE_MAPS_API_KEY not set; track requests will return a configuration error"
        );
    }

    // Initialize services
    let geocoder = if let Some(ref base_url) = config.google_maps_base_url {
        GoogleMapsGeocoder::with_base_url(config.google_maps_api_key.clone(), base_url.clone())
    } else {
        GoogleMapsGeocoder::new(config.google_maps_api_key.clone())
    };
    let track_service = TrackService::new(Arc::new(geocoder), TrackSynthesizer::new());

    // Create application state
    let state = Arc::new(AppState {
        track_service,
        credential_configured,
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", runtrack::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
