//! Model status handler

use axum::{extract::State, Json};
use medipredict_core::ModelStatus;

use crate::AppState;

/// Per-disease model availability
pub async fn list(State(state): State<AppState>) -> Json<Vec<ModelStatus>> {
    Json(state.dispatcher.registry().status())
}
