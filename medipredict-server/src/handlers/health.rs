//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    environment: String,
    timestamp: i64,
    models_loaded: usize,
    models_total: usize,
}

/// "healthy" when every disease has a model, "degraded" otherwise
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = state.dispatcher.registry();
    let models_loaded = registry.loaded_count();
    let models_total = medipredict_core::Disease::COUNT;

    Json(HealthResponse {
        status: if models_loaded == models_total { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        timestamp: chrono::Utc::now().timestamp(),
        models_loaded,
        models_total,
    })
}
