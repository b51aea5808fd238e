//! Error types
//!
//! `DiagnosisError` is what a caller of `Dispatcher::predict` sees.
//! `LoadError` only happens at startup while reading model artifacts.

use thiserror::Error;

use crate::disease::Disease;

pub type DispatchResult<T> = Result<T, DiagnosisError>;

// ============================================================================
// REQUEST ERRORS
// ============================================================================

/// Failure of a single prediction request
///
/// None of these are fatal: the registry and other classifiers are untouched
/// and the driver may resubmit after correcting the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagnosisError {
    #[error("unknown disease '{0}'")]
    UnknownDisease(String),

    #[error("missing required field '{field}' for {disease}")]
    MissingField { disease: Disease, field: String },

    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a whole number, got {value}")]
    NotAnInteger { field: String, value: f64 },

    #[error("prediction backend failed for {disease}: {cause}")]
    PredictionBackend { disease: Disease, cause: String },

    #[error("classifier for {disease} returned unexpected label {value}")]
    UnexpectedOutput { disease: Disease, value: i64 },
}

impl DiagnosisError {
    /// Stable machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            DiagnosisError::UnknownDisease(_) => "unknown_disease",
            DiagnosisError::MissingField { .. } => "missing_field",
            DiagnosisError::OutOfRange { .. } => "out_of_range",
            DiagnosisError::NotAnInteger { .. } => "not_an_integer",
            DiagnosisError::PredictionBackend { .. } => "prediction_backend",
            DiagnosisError::UnexpectedOutput { .. } => "unexpected_output",
        }
    }

    /// Offending field, for errors the user fixes by re-entering a value
    pub fn field(&self) -> Option<&str> {
        match self {
            DiagnosisError::MissingField { field, .. }
            | DiagnosisError::OutOfRange { field, .. }
            | DiagnosisError::NotAnInteger { field, .. } => Some(field),
            _ => None,
        }
    }

    /// True when the input was at fault (as opposed to the backend)
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            DiagnosisError::PredictionBackend { .. } | DiagnosisError::UnexpectedOutput { .. }
        )
    }
}

// ============================================================================
// ARTIFACT LOADING ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("model artifact not found: {0}")]
    NotFound(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "feature layout mismatch for {disease}: expected v{expected_version} (hash: {expected_hash:08x}), got v{actual_version} (hash: {actual_hash:08x})"
    )]
    LayoutMismatch {
        disease: Disease,
        expected_version: u8,
        expected_hash: u32,
        actual_version: u8,
        actual_hash: u32,
    },

    #[error("invalid artifact {path}: {reason}")]
    Invalid { path: String, reason: String },

    #[error("onnx runtime error: {0}")]
    Runtime(String),
}
