//! Prediction Dispatcher
//!
//! validate → assemble → invoke → interpret. Holds nothing but a shared,
//! read-only registry, so calls are independent and idempotent.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use super::types::{DiagnosisResult, PredictedClass, PredictionRequest};
use crate::disease::Disease;
use crate::error::{DiagnosisError, DispatchResult};
use crate::features::{assemble, FeatureVector, FieldValues};
use crate::model::Classifier;
use crate::registry::{ClassifierRef, Registry};

#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run one prediction
    pub fn predict(&self, disease_id: &str, fields: &FieldValues) -> DispatchResult<DiagnosisResult> {
        let result = self.run(disease_id, fields);

        match &result {
            Ok(diagnosis) => log::info!(
                "{}: predicted class {} ({})",
                diagnosis.disease_id,
                diagnosis.predicted_class,
                diagnosis.message
            ),
            Err(e) if e.is_input_error() => log::debug!("{}: rejected input: {}", disease_id, e),
            Err(e) => log::warn!("{}: {}", disease_id, e),
        }

        result
    }

    /// Consume a request
    pub fn handle(&self, request: PredictionRequest) -> DispatchResult<DiagnosisResult> {
        self.predict(&request.disease_id, &request.field_values)
    }

    fn run(&self, disease_id: &str, fields: &FieldValues) -> DispatchResult<DiagnosisResult> {
        let entry = self.registry.get(disease_id)?;
        let spec = entry.spec;
        let disease = spec.disease;

        let vector = assemble(spec, fields)?;
        debug_assert_eq!(vector.len(), spec.feature_count());

        let classifier = match entry.classifier {
            ClassifierRef::Loaded { classifier, .. } => &**classifier,
            ClassifierRef::Unavailable { reason } => {
                return Err(DiagnosisError::PredictionBackend {
                    disease,
                    cause: format!("model not loaded: {}", reason),
                });
            }
        };

        let label = invoke(disease, classifier, &vector)?;

        let class = PredictedClass::try_from(label)
            .map_err(|value| DiagnosisError::UnexpectedOutput { disease, value })?;

        Ok(DiagnosisResult {
            disease_id: disease,
            predicted_class: class.as_u8(),
            positive: class == PredictedClass::Positive,
            message: spec.render_rule.render(class).to_string(),
        })
    }
}

/// Call the classifier, turning both returned errors and panics into a
/// backend error
fn invoke(disease: Disease, classifier: &dyn Classifier, vector: &FeatureVector) -> DispatchResult<i64> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| classifier.predict(vector.as_slice())));

    match outcome {
        Ok(Ok(label)) => Ok(label),
        Ok(Err(e)) => Err(DiagnosisError::PredictionBackend {
            disease,
            cause: e.to_string(),
        }),
        Err(payload) => {
            log::error!("classifier panicked ({})", panic_context(vector));
            log::debug!("vector at panic: {}", vector.to_log_entry());
            Err(DiagnosisError::PredictionBackend {
                disease,
                cause: format!("classifier panicked: {}", panic_message(payload.as_ref())),
            })
        }
    }
}

/// Identifies the failing model without the patient's values
fn panic_context(vector: &FeatureVector) -> String {
    format!("disease {}, layout {:08x}", vector.disease(), vector.layout_hash())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
