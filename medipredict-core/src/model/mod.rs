//! Model Module - Classifier backends & artifact loading
//!
//! Classifiers are injected behind the `Classifier` trait so the dispatcher
//! does not depend on any artifact format.

pub mod classifier;
pub mod linear;
pub mod loader;
#[cfg(feature = "onnx")]
pub mod onnx;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::disease::Disease;
use crate::registry::ClassifierRef;

// Re-export common types
pub use classifier::{Classifier, ClassifierError};
pub use linear::{LinearArtifact, LinearModel};
pub use loader::{load_classifier, load_registry, ModelConfig};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Where a bound classifier came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Artifact path, or "<injected>" for in-process classifiers
    pub source: String,
    /// "linear", "onnx", "custom"
    pub format: String,
    pub loaded_at: DateTime<Utc>,
}

impl ModelMetadata {
    pub fn loaded(path: &Path, format: &str) -> Self {
        Self {
            source: path.display().to_string(),
            format: format.to_string(),
            loaded_at: Utc::now(),
        }
    }

    pub fn injected(format: &str) -> Self {
        Self {
            source: "<injected>".to_string(),
            format: format.to_string(),
            loaded_at: Utc::now(),
        }
    }
}

/// Model status for drivers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    pub disease: Disease,
    pub title: String,
    pub loaded: bool,
    pub format: Option<String>,
    pub source: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl ModelStatus {
    pub fn of(disease: Disease, binding: &ClassifierRef) -> Self {
        match binding {
            ClassifierRef::Loaded { metadata, .. } => Self {
                disease,
                title: disease.title().to_string(),
                loaded: true,
                format: Some(metadata.format.clone()),
                source: Some(metadata.source.clone()),
                loaded_at: Some(metadata.loaded_at),
                error: None,
            },
            ClassifierRef::Unavailable { reason } => Self {
                disease,
                title: disease.title().to_string(),
                loaded: false,
                format: None,
                source: None,
                loaded_at: None,
                error: Some(reason.clone()),
            },
        }
    }
}
