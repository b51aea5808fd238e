//! Artifact loader
//!
//! Reads one artifact per disease from the model directory at startup.
//! A broken or missing artifact disables only its own disease.

use std::path::PathBuf;
use std::sync::Arc;

use super::classifier::Classifier;
use super::linear::LinearModel;
use super::ModelMetadata;
use crate::disease::Disease;
use crate::error::LoadError;
use crate::registry::{spec_for, Registry};

/// Default model directory (relative to the working directory)
pub const DEFAULT_MODEL_DIR: &str = "models";

#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub model_dir: PathBuf,
}

impl ModelConfig {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
        }
    }

    pub fn artifact_path(&self, disease: Disease, extension: &str) -> PathBuf {
        self.model_dir
            .join(disease.artifact_stem())
            .with_extension(extension)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_DIR)
    }
}

/// Load every disease's artifact and build the registry. Never fails as a
/// whole; unloadable diseases are bound as unavailable.
pub fn load_registry(config: &ModelConfig) -> Registry {
    log::info!("Loading models from: {}", config.model_dir.display());

    let mut builder = Registry::builder();

    for disease in Disease::ALL {
        builder = match load_classifier(config, disease) {
            Ok((classifier, metadata)) => {
                log::info!("{} model loaded ({}, {})", disease, metadata.format, metadata.source);
                builder.bind_loaded(disease, classifier, metadata)
            }
            Err(e) => {
                log::warn!("{} model unavailable: {}", disease, e);
                builder.unavailable(disease, e.to_string())
            }
        };
    }

    let registry = builder.build();
    log::info!("{}/{} models loaded", registry.loaded_count(), Disease::COUNT);
    registry
}

/// Load one disease's artifact. `<stem>.json` wins over `<stem>.onnx`.
pub fn load_classifier(
    config: &ModelConfig,
    disease: Disease,
) -> Result<(Arc<dyn Classifier>, ModelMetadata), LoadError> {
    let spec = spec_for(disease);

    let json_path = config.artifact_path(disease, "json");
    if json_path.is_file() {
        let model: Arc<dyn Classifier> = Arc::new(LinearModel::from_file(&json_path, spec)?);
        return Ok((model, ModelMetadata::loaded(&json_path, "linear")));
    }

    #[cfg(feature = "onnx")]
    {
        let onnx_path = config.artifact_path(disease, "onnx");
        if onnx_path.is_file() {
            let model: Arc<dyn Classifier> =
                Arc::new(super::onnx::OnnxClassifier::load(&onnx_path, spec.feature_count())?);
            return Ok((model, ModelMetadata::loaded(&onnx_path, "onnx")));
        }
    }

    Err(LoadError::NotFound(json_path.display().to_string()))
}
