//! Prediction handler

use axum::{extract::{rejection::JsonRejection, State}, Json};
use medipredict_core::{DiagnosisResult, PredictionRequest};
use serde::Serialize;
use uuid::Uuid;

use crate::{AppState, AppResult, AppError};

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub request_id: Uuid,
    #[serde(flatten)]
    pub result: DiagnosisResult,
}

/// Validate the submitted form and run the disease's classifier
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(request) = payload.map_err(|e| AppError::ValidationError(e.body_text()))?;

    let request_id = Uuid::new_v4();
    tracing::debug!(
        %request_id,
        disease = %request.disease_id,
        fields = request.field_values.len(),
        "Prediction request"
    );

    let result = state.dispatcher.handle(request).map_err(|e| {
        tracing::info!(%request_id, kind = e.kind(), "Prediction rejected: {}", e);
        e
    })?;

    Ok(Json(PredictResponse { request_id, result }))
}
