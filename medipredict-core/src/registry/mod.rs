//! Registry Module - Disease tables + classifier bindings
//!
//! Single source of truth for which features a disease requires, their
//! bounds, and which classifier answers them. Built once at startup and
//! read-only afterwards.

pub mod layout;
pub mod tables;

use std::fmt;
use std::sync::Arc;

use crate::disease::Disease;
use crate::error::DispatchResult;
use crate::model::{Classifier, ModelMetadata, ModelStatus};

// Re-export common types
pub use layout::{DiseaseSpec, FeatureSpec, LayoutInfo, RenderRule, ValueType, LAYOUT_VERSION};
pub use tables::spec_for;

// ============================================================================
// CLASSIFIER BINDING
// ============================================================================

/// Classifier bound to a disease
#[derive(Clone)]
pub enum ClassifierRef {
    Loaded {
        classifier: Arc<dyn Classifier>,
        metadata: ModelMetadata,
    },
    /// Artifact missing or broken; requests for this disease fail with a
    /// backend error while the others keep working
    Unavailable { reason: String },
}

impl ClassifierRef {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ClassifierRef::Loaded { .. })
    }
}

impl fmt::Debug for ClassifierRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierRef::Loaded { classifier, metadata } => f
                .debug_struct("Loaded")
                .field("kind", &classifier.kind())
                .field("metadata", metadata)
                .finish(),
            ClassifierRef::Unavailable { reason } => {
                f.debug_struct("Unavailable").field("reason", reason).finish()
            }
        }
    }
}

/// Registry lookup result
#[derive(Debug, Clone, Copy)]
pub struct DiseaseEntry<'a> {
    pub spec: &'static DiseaseSpec,
    pub classifier: &'a ClassifierRef,
}

// ============================================================================
// REGISTRY
// ============================================================================

#[derive(Debug)]
pub struct Registry {
    bindings: [ClassifierRef; Disease::COUNT],
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Resolve a disease id
    pub fn get(&self, disease_id: &str) -> DispatchResult<DiseaseEntry<'_>> {
        let disease: Disease = disease_id.parse()?;
        Ok(self.entry(disease))
    }

    pub fn entry(&self, disease: Disease) -> DiseaseEntry<'_> {
        DiseaseEntry {
            spec: spec_for(disease),
            classifier: &self.bindings[disease.index()],
        }
    }

    pub fn is_available(&self, disease: Disease) -> bool {
        self.bindings[disease.index()].is_loaded()
    }

    /// Per-disease model status, in menu order
    pub fn status(&self) -> Vec<ModelStatus> {
        Disease::ALL
            .iter()
            .map(|&disease| ModelStatus::of(disease, &self.bindings[disease.index()]))
            .collect()
    }

    pub fn loaded_count(&self) -> usize {
        self.bindings.iter().filter(|b| b.is_loaded()).count()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for `Registry`. Diseases never bound end up `Unavailable`.
pub struct RegistryBuilder {
    bindings: [Option<ClassifierRef>; Disease::COUNT],
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            bindings: std::array::from_fn(|_| None),
        }
    }

    /// Bind an in-process classifier
    pub fn bind(self, disease: Disease, classifier: Arc<dyn Classifier>) -> Self {
        let metadata = ModelMetadata::injected(classifier.kind());
        self.bind_loaded(disease, classifier, metadata)
    }

    pub fn bind_loaded(
        mut self,
        disease: Disease,
        classifier: Arc<dyn Classifier>,
        metadata: ModelMetadata,
    ) -> Self {
        self.bindings[disease.index()] = Some(ClassifierRef::Loaded { classifier, metadata });
        self
    }

    pub fn unavailable(mut self, disease: Disease, reason: impl Into<String>) -> Self {
        self.bindings[disease.index()] = Some(ClassifierRef::Unavailable {
            reason: reason.into(),
        });
        self
    }

    pub fn build(self) -> Registry {
        let bindings = self.bindings.map(|b| {
            b.unwrap_or_else(|| ClassifierRef::Unavailable {
                reason: "no classifier bound".to_string(),
            })
        });
        Registry { bindings }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiagnosisError;
    use crate::model::ClassifierError;

    fn always(label: i64) -> Arc<dyn Classifier> {
        Arc::new(move |_: &[f64]| -> Result<i64, ClassifierError> { Ok(label) })
    }

    #[test]
    fn test_get_known_ids() {
        let registry = Registry::builder().build();
        for (disease, count) in Disease::ALL.iter().zip([8, 13, 22, 15, 7]) {
            let entry = registry.get(disease.id()).unwrap();
            assert_eq!(entry.spec.disease, *disease);
            assert_eq!(entry.spec.feature_count(), count);
        }
    }

    #[test]
    fn test_get_unknown_id() {
        let registry = Registry::builder().build();
        let err = registry.get("flu").unwrap_err();
        assert_eq!(err, DiagnosisError::UnknownDisease("flu".to_string()));
    }

    #[test]
    fn test_unbound_is_unavailable() {
        let registry = Registry::builder().bind(Disease::Diabetes, always(0)).build();
        assert!(registry.is_available(Disease::Diabetes));
        assert!(!registry.is_available(Disease::Thyroid));
        assert_eq!(registry.loaded_count(), 1);

        match registry.entry(Disease::Thyroid).classifier {
            ClassifierRef::Unavailable { reason } => assert_eq!(reason, "no classifier bound"),
            other => panic!("expected unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_unavailable_keeps_reason() {
        let registry = Registry::builder()
            .unavailable(Disease::LungCancer, "artifact corrupt")
            .build();
        let status = registry.status();
        assert_eq!(status.len(), Disease::COUNT);
        let lung = &status[Disease::LungCancer.index()];
        assert!(!lung.loaded);
        assert_eq!(lung.error.as_deref(), Some("artifact corrupt"));
    }

    #[test]
    fn test_later_binding_wins() {
        let registry = Registry::builder()
            .unavailable(Disease::Parkinsons, "missing")
            .bind(Disease::Parkinsons, always(1))
            .build();
        assert!(registry.is_available(Disease::Parkinsons));
    }
}
