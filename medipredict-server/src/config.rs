//! Configuration module

use std::env;
use std::path::PathBuf;

use medipredict_core::ModelConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Directory holding one model artifact per disease
    pub model_dir: PathBuf,

    /// Environment (development, production)
    pub environment: String,

    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            model_dir: env::var("MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_dir),

            environment: env::var("ENVIRONMENT")
                .unwrap_or(defaults.environment),

            log_json: env::var("LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.log_json),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn model_config(&self) -> ModelConfig {
        ModelConfig::new(self.model_dir.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            model_dir: PathBuf::from(medipredict_core::model::loader::DEFAULT_MODEL_DIR),
            environment: "development".to_string(),
            log_json: false,
        }
    }
}
