//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use medipredict_core::DiagnosisError;
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Prediction errors from the core
    Diagnosis(DiagnosisError),

    // Malformed request body
    ValidationError(String),

    // Unknown route
    NotFound(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Diagnosis(err) => match err {
                DiagnosisError::UnknownDisease(_) => StatusCode::NOT_FOUND,
                DiagnosisError::MissingField { .. }
                | DiagnosisError::OutOfRange { .. }
                | DiagnosisError::NotAnInteger { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                DiagnosisError::PredictionBackend { .. } => StatusCode::SERVICE_UNAVAILABLE,
                DiagnosisError::UnexpectedOutput { .. } => StatusCode::BAD_GATEWAY,
            },
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            AppError::Diagnosis(err) => err.kind(),
            AppError::ValidationError(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, field) = match &self {
            AppError::Diagnosis(err) => {
                if !err.is_input_error() {
                    tracing::error!("Prediction backend error: {}", err);
                }
                (err.to_string(), err.field().map(str::to_string))
            }
            AppError::ValidationError(msg) | AppError::NotFound(msg) => (msg.clone(), None),
        };

        let mut body = json!({
            "error": message,
            "kind": self.kind(),
            "status": status.as_u16()
        });
        if let Some(field) = field {
            body["field"] = json!(field);
        }

        (status, Json(body)).into_response()
    }
}

impl From<DiagnosisError> for AppError {
    fn from(err: DiagnosisError) -> Self {
        AppError::Diagnosis(err)
    }
}
