use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if services are working
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    // A missing geocoding credential is not fatal, but worth surfacing
    if state.credential_configured {
        status["checks"]["geocoding_credential"] = json!("ok");
    } else {
        status["checks"]["geocoding_credential"] = json!("missing");
        status["status"] = json!("degraded");
    }

    Json(status)
}
