//! HTTP handlers

pub mod health;
pub mod diseases;
pub mod models;
pub mod predict;

use axum::http::Uri;

use crate::AppError;

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
