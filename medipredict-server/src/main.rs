//! MediPredict Server
//!
//! HTTP front end for the disease prediction dispatcher. Serves the form
//! schema for each disease and runs predictions against the loaded models.
//!
//! # Routes
//!
//! ```text
//! GET  /health                  liveness + model availability
//! GET  /api/v1/diseases         disease menu
//! GET  /api/v1/diseases/:id     form schema for one disease
//! GET  /api/v1/models           per-disease model status
//! POST /api/v1/predict          run one prediction
//! ```

mod config;
mod error;
mod handlers;


use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use medipredict_core::{model::load_registry, Dispatcher};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    init_tracing(&config);

    tracing::info!("MediPredict server starting ({})", config.environment);
    tracing::info!("Model directory: {}", config.model_dir.display());

    let registry = load_registry(&config.model_config());
    let loaded = registry.loaded_count();
    if loaded == 0 {
        tracing::warn!("No models loaded, every prediction will fail until artifacts are provided");
    } else {
        tracing::info!("{}/{} models loaded", loaded, medipredict_core::Disease::COUNT);
    }

    let state = AppState {
        dispatcher: Dispatcher::new(Arc::new(registry)),
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing(config: &config::Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "medipredict_server=debug,medipredict_core=info,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json || config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/diseases", get(handlers::diseases::list))
        .route("/api/v1/diseases/:id", get(handlers::diseases::get))
        .route("/api/v1/models", get(handlers::models::list))
        .route("/api/v1/predict", post(handlers::predict::predict))
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
