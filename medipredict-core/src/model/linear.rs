//! Linear artifact - standardized logistic model stored as JSON
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "disease": "diabetes",
//!   "layout_version": 1,
//!   "feature_names": ["Pregnancies", "Glucose", ...],
//!   "mean": [...], "scale": [...],
//!   "coefficients": [...],
//!   "intercept": -0.8,
//!   "threshold": 0.5
//! }
//! ```
//!
//! label = 1 when sigmoid(intercept + Σ coef_i * (x_i - mean_i) / scale_i) >= threshold

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::classifier::{check_shape, Classifier, ClassifierError};
use crate::disease::Disease;
use crate::error::LoadError;
use crate::registry::layout::{compute_layout_hash, DiseaseSpec, LAYOUT_VERSION};

/// Supported artifact format version
pub const LINEAR_FORMAT_VERSION: u32 = 1;

pub const DEFAULT_THRESHOLD: f64 = 0.5;

fn default_layout_version() -> u8 {
    LAYOUT_VERSION
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

// ============================================================================
// ARTIFACT (on-disk format)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearArtifact {
    pub format_version: u32,
    pub disease: Disease,
    #[serde(default = "default_layout_version")]
    pub layout_version: u8,
    pub feature_names: Vec<String>,
    #[serde(default)]
    pub mean: Option<Vec<f64>>,
    #[serde(default)]
    pub scale: Option<Vec<f64>>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

// ============================================================================
// MODEL
// ============================================================================

/// Validated, ready-to-run linear classifier
#[derive(Debug, Clone)]
pub struct LinearModel {
    disease: Disease,
    mean: Vec<f64>,
    scale: Vec<f64>,
    coefficients: Vec<f64>,
    intercept: f64,
    threshold: f64,
}

impl LinearModel {
    /// Read and validate an artifact file
    pub fn from_file(path: &Path, spec: &DiseaseSpec) -> Result<Self, LoadError> {
        let display = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_json_str(&raw, &display, spec)
    }

    pub fn from_json_str(raw: &str, source: &str, spec: &DiseaseSpec) -> Result<Self, LoadError> {
        let artifact: LinearArtifact = serde_json::from_str(raw).map_err(|e| LoadError::Parse {
            path: source.to_string(),
            source: e,
        })?;
        Self::from_artifact(artifact, source, spec)
    }

    pub fn from_artifact(artifact: LinearArtifact, source: &str, spec: &DiseaseSpec) -> Result<Self, LoadError> {
        let invalid = |reason: String| LoadError::Invalid {
            path: source.to_string(),
            reason,
        };

        if artifact.format_version != LINEAR_FORMAT_VERSION {
            return Err(invalid(format!(
                "unsupported format_version {} (expected {})",
                artifact.format_version, LINEAR_FORMAT_VERSION
            )));
        }

        if artifact.disease != spec.disease {
            return Err(invalid(format!(
                "artifact was trained for {}, not {}",
                artifact.disease, spec.disease
            )));
        }

        let actual_hash = compute_layout_hash(
            artifact.layout_version,
            artifact.disease,
            artifact.feature_names.iter().map(String::as_str),
        );
        let expected_hash = spec.layout_hash();
        if artifact.layout_version != LAYOUT_VERSION || actual_hash != expected_hash {
            return Err(LoadError::LayoutMismatch {
                disease: spec.disease,
                expected_version: LAYOUT_VERSION,
                expected_hash,
                actual_version: artifact.layout_version,
                actual_hash,
            });
        }

        let n = spec.feature_count();
        let mean = artifact.mean.unwrap_or_else(|| vec![0.0; n]);
        let scale = artifact.scale.unwrap_or_else(|| vec![1.0; n]);

        for (name, values) in [("coefficients", &artifact.coefficients), ("mean", &mean), ("scale", &scale)] {
            if values.len() != n {
                return Err(invalid(format!("{} has {} entries, expected {}", name, values.len(), n)));
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(invalid(format!("{} contains non-finite values", name)));
            }
        }

        if scale.iter().any(|s| *s == 0.0) {
            return Err(invalid("scale contains zero".to_string()));
        }
        if !artifact.intercept.is_finite() {
            return Err(invalid("intercept is not finite".to_string()));
        }
        if !(artifact.threshold > 0.0 && artifact.threshold < 1.0) {
            return Err(invalid(format!("threshold {} not in (0, 1)", artifact.threshold)));
        }

        Ok(Self {
            disease: artifact.disease,
            mean,
            scale,
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
            threshold: artifact.threshold,
        })
    }

    pub fn disease(&self) -> Disease {
        self.disease
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Positive-class probability
    pub fn probability(&self, vector: &[f64]) -> Result<f64, ClassifierError> {
        check_shape(self.coefficients.len(), vector)?;

        if let Some(pos) = vector.iter().position(|v| !v.is_finite()) {
            return Err(ClassifierError::NonFiniteInput(pos));
        }

        let z = vector
            .iter()
            .zip(&self.mean)
            .zip(&self.scale)
            .zip(&self.coefficients)
            .fold(self.intercept, |acc, (((x, m), s), c)| acc + c * (x - m) / s);

        Ok(sigmoid(z))
    }
}

impl Classifier for LinearModel {
    fn predict(&self, vector: &[f64]) -> Result<i64, ClassifierError> {
        let p = self.probability(vector)?;
        Ok(if p >= self.threshold { 1 } else { 0 })
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::spec_for;
    use serde_json::json;

    fn thyroid_artifact() -> serde_json::Value {
        json!({
            "format_version": 1,
            "disease": "thyroid",
            "feature_names": ["age", "sex", "on_thyroxine", "tsh", "t3_measured", "t3", "tt4"],
            "coefficients": [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
            "intercept": -10.0
        })
    }

    fn load(value: serde_json::Value) -> Result<LinearModel, LoadError> {
        LinearModel::from_json_str(&value.to_string(), "<test>", spec_for(Disease::Thyroid))
    }

    #[test]
    fn test_predicts_by_threshold() {
        let model = load(thyroid_artifact()).unwrap();
        assert_eq!(model.kind(), "linear");
        assert_eq!(model.threshold(), DEFAULT_THRESHOLD);

        // tsh 20 → z = 10 → positive
        assert_eq!(model.predict(&[40.0, 1.0, 0.0, 20.0, 1.0, 1.5, 80.0]), Ok(1));
        // tsh 1 → z = -9 → negative
        assert_eq!(model.predict(&[40.0, 1.0, 0.0, 1.0, 1.0, 1.5, 80.0]), Ok(0));
    }

    #[test]
    fn test_standardization() {
        let mut artifact = thyroid_artifact();
        artifact["mean"] = json!([0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0]);
        artifact["scale"] = json!([1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0]);
        artifact["intercept"] = json!(0.0);
        let model = load(artifact).unwrap();

        let p = model.probability(&[0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0]).unwrap();
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_shape_mismatch() {
        let model = load(thyroid_artifact()).unwrap();
        assert_eq!(
            model.predict(&[1.0, 2.0]),
            Err(ClassifierError::ShapeMismatch { expected: 7, actual: 2 })
        );
    }

    #[test]
    fn test_non_finite_input() {
        let model = load(thyroid_artifact()).unwrap();
        let err = model.predict(&[40.0, 1.0, 0.0, f64::NAN, 1.0, 1.5, 80.0]).unwrap_err();
        assert_eq!(err, ClassifierError::NonFiniteInput(3));
    }

    #[test]
    fn test_rejects_reordered_features() {
        let mut artifact = thyroid_artifact();
        artifact["feature_names"] = json!(["sex", "age", "on_thyroxine", "tsh", "t3_measured", "t3", "tt4"]);
        let err = load(artifact).unwrap_err();
        assert!(matches!(err, LoadError::LayoutMismatch { disease: Disease::Thyroid, .. }));
    }

    #[test]
    fn test_rejects_other_disease() {
        let mut artifact = thyroid_artifact();
        artifact["disease"] = json!("diabetes");
        assert!(matches!(load(artifact), Err(LoadError::Invalid { .. })));
    }

    #[test]
    fn test_rejects_bad_lengths_and_values() {
        let mut short = thyroid_artifact();
        short["coefficients"] = json!([1.0]);
        assert!(matches!(load(short), Err(LoadError::Invalid { .. })));

        let mut zero_scale = thyroid_artifact();
        zero_scale["scale"] = json!([1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
        assert!(matches!(load(zero_scale), Err(LoadError::Invalid { .. })));

        let mut threshold = thyroid_artifact();
        threshold["threshold"] = json!(1.5);
        assert!(matches!(load(threshold), Err(LoadError::Invalid { .. })));

        let mut version = thyroid_artifact();
        version["format_version"] = json!(2);
        assert!(matches!(load(version), Err(LoadError::Invalid { .. })));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = LinearModel::from_json_str("{not json", "<test>", spec_for(Disease::Thyroid)).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
