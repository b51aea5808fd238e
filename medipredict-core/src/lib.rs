//! MediPredict Core - Disease Registry & Prediction Dispatch
//!
//! Maps a disease to the ordered features it needs, validates submitted
//! values against their bounds, assembles the feature vector and hands it to
//! the classifier bound to that disease.
//!
//! ```text
//!  driver ──► Dispatcher::predict(disease_id, field_values)
//!                 │
//!                 ├─► Registry::get ──► DiseaseSpec + ClassifierRef
//!                 ├─► features::assemble (lookup, validate, order)
//!                 ├─► Classifier::predict(&[f64]) -> label
//!                 └─► RenderRule ──► DiagnosisResult
//! ```
//!
//! ## Modules
//! - `disease` - closed set of supported diseases
//! - `registry/` - static tables + classifier bindings
//! - `features/` - validation and vector assembly
//! - `model/` - classifier seam, artifact formats, loader
//! - `dispatch/` - the predict pipeline

pub mod disease;
pub mod error;
pub mod registry;
pub mod features;
pub mod model;
pub mod dispatch;

#[cfg(test)]
mod tests;

// Re-export common types
pub use disease::Disease;
pub use error::{DiagnosisError, DispatchResult, LoadError};
pub use registry::{ClassifierRef, DiseaseEntry, DiseaseSpec, FeatureSpec, Registry, RegistryBuilder, RenderRule, ValueType};
pub use features::{FeatureVector, FieldValues};
pub use model::{Classifier, ClassifierError, ModelConfig, ModelMetadata, ModelStatus};
pub use dispatch::{DiagnosisResult, Dispatcher, PredictedClass, PredictionRequest};
