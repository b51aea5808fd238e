//! Supported diseases
//!
//! The registry is keyed by this enum instead of free-form strings, so every
//! table lookup is an exhaustive `match`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiagnosisError;

/// Disease handled by one of the five classifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    Diabetes,
    HeartDisease,
    Parkinsons,
    LungCancer,
    Thyroid,
}

impl Disease {
    /// Number of supported diseases
    pub const COUNT: usize = 5;

    /// All diseases, in menu order
    pub const ALL: [Disease; Disease::COUNT] = [
        Disease::Diabetes,
        Disease::HeartDisease,
        Disease::Parkinsons,
        Disease::LungCancer,
        Disease::Thyroid,
    ];

    /// Stable identifier used by drivers and artifacts
    pub fn id(&self) -> &'static str {
        match self {
            Disease::Diabetes => "diabetes",
            Disease::HeartDisease => "heart_disease",
            Disease::Parkinsons => "parkinsons",
            Disease::LungCancer => "lung_cancer",
            Disease::Thyroid => "thyroid",
        }
    }

    /// Screen title shown by the form driver
    pub fn title(&self) -> &'static str {
        match self {
            Disease::Diabetes => "Diabetes Prediction",
            Disease::HeartDisease => "Heart Disease Prediction",
            Disease::Parkinsons => "Parkinsons Prediction",
            Disease::LungCancer => "Lung Cancer Prediction",
            Disease::Thyroid => "Hypo-Thyroid Prediction",
        }
    }

    /// File stem of the serialized model inside the model directory
    pub fn artifact_stem(&self) -> &'static str {
        match self {
            Disease::Diabetes => "diabetes_model",
            Disease::HeartDisease => "heart_disease_model",
            Disease::Parkinsons => "parkinsons_model",
            Disease::LungCancer => "lungs_disease_model",
            Disease::Thyroid => "Thyroid_model",
        }
    }

    /// Slot of this disease in per-disease arrays
    pub fn index(&self) -> usize {
        match self {
            Disease::Diabetes => 0,
            Disease::HeartDisease => 1,
            Disease::Parkinsons => 2,
            Disease::LungCancer => 3,
            Disease::Thyroid => 4,
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Disease {
    type Err = DiagnosisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Disease::ALL
            .into_iter()
            .find(|d| d.id() == s)
            .ok_or_else(|| DiagnosisError::UnknownDisease(s.to_string()))
    }
}
