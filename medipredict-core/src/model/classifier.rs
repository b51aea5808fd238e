//! Classifier seam
//!
//! A classifier is an opaque binary predictor: a fixed-length vector in, a
//! class label out. The dispatcher never looks inside.

use thiserror::Error;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    #[error("shape mismatch: expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("non-finite input at position {0}")]
    NonFiniteInput(usize),

    #[error("{0}")]
    Internal(String),
}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Trait for prediction backends (linear artifact, ONNX, in-process closures)
pub trait Classifier: Send + Sync {
    /// Predict the class label of one feature vector
    fn predict(&self, vector: &[f64]) -> Result<i64, ClassifierError>;

    /// Short backend name for status and logs
    fn kind(&self) -> &'static str {
        "custom"
    }
}

impl<F> Classifier for F
where
    F: Fn(&[f64]) -> Result<i64, ClassifierError> + Send + Sync,
{
    fn predict(&self, vector: &[f64]) -> Result<i64, ClassifierError> {
        self(vector)
    }
}

/// Check the vector length a backend was built for
pub fn check_shape(expected: usize, vector: &[f64]) -> Result<(), ClassifierError> {
    if vector.len() != expected {
        return Err(ClassifierError::ShapeMismatch {
            expected,
            actual: vector.len(),
        });
    }
    Ok(())
}
