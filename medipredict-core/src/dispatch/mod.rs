//! Dispatch Module - The predict pipeline
//!
//! `dispatcher` holds the logic, `types` the request/response shapes.

pub mod dispatcher;
pub mod types;

// Re-export common types
pub use dispatcher::Dispatcher;
pub use types::{DiagnosisResult, PredictedClass, PredictionRequest};
