pub mod debug;
pub mod tracks;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/tracks", post(tracks::generate_tracks))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
