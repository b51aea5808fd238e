//! Dispatch Types
//!
//! Request/response data only, no logic.

use serde::{Deserialize, Serialize};

use crate::disease::Disease;
use crate::features::FieldValues;

// ============================================================================
// PREDICTED CLASS
// ============================================================================

/// Binary classifier output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictedClass {
    Negative,
    Positive,
}

impl PredictedClass {
    pub fn as_u8(&self) -> u8 {
        match self {
            PredictedClass::Negative => 0,
            PredictedClass::Positive => 1,
        }
    }
}

impl TryFrom<i64> for PredictedClass {
    type Error = i64;

    fn try_from(label: i64) -> Result<Self, Self::Error> {
        match label {
            0 => Ok(PredictedClass::Negative),
            1 => Ok(PredictedClass::Positive),
            other => Err(other),
        }
    }
}

// ============================================================================
// REQUEST
// ============================================================================

/// One form submission. Created per submit, consumed by the dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub disease_id: String,
    pub field_values: FieldValues,
}

// ============================================================================
// RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub disease_id: Disease,
    /// 0 or 1
    pub predicted_class: u8,
    pub positive: bool,
    pub message: String,
}
