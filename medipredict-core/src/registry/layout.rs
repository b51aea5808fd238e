//! Feature Layout - Per-disease feature definitions
//!
//! **The order of `DiseaseSpec::features` is the classifier's input order.**
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → retrain and ship a new artifact
//! 2. Change order → retrain and ship a new artifact
//! 3. Change the layout hashing → increment LAYOUT_VERSION
//!
//! Artifacts record the feature names they were trained on; the loader
//! compares their layout hash against the table and refuses mismatches.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

use crate::disease::Disease;
use crate::dispatch::PredictedClass;

// ============================================================================
// LAYOUT VERSION
// ============================================================================

/// Current layout hashing version
pub const LAYOUT_VERSION: u8 = 1;

// ============================================================================
// FEATURE SPEC
// ============================================================================

/// Semantic type of an input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Integer,
    Real,
}

/// One named, bounded input field
#[derive(Debug, Clone, Serialize)]
pub struct FeatureSpec {
    /// Key in `field_values`, unique within its disease
    pub name: &'static str,
    /// Form prompt
    pub label: &'static str,
    pub value_type: ValueType,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
    /// Decimal places used for display only
    pub precision: u8,
}

impl FeatureSpec {
    pub const fn integer(name: &'static str, label: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            label,
            value_type: ValueType::Integer,
            min,
            max,
            precision: 0,
        }
    }

    pub const fn real(name: &'static str, label: &'static str, min: f64, max: f64, precision: u8) -> Self {
        Self {
            name,
            label,
            value_type: ValueType::Real,
            min,
            max,
            precision,
        }
    }

    /// Flag field with an explicit two-value encoding, e.g. {0,1} or {1,2}
    pub const fn flag(name: &'static str, label: &'static str, off: f64, on: f64) -> Self {
        Self::integer(name, label, off, on)
    }

    /// Inclusive range check (NaN is never contained)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Widget step derived from the display precision
    pub fn step(&self) -> f64 {
        10f64.powi(-(self.precision as i32))
    }

    /// Render a value for display. The value passed to classifiers is never
    /// rounded.
    pub fn display_value(&self, value: f64) -> String {
        format!("{:.*}", self.precision as usize, value)
    }
}

// ============================================================================
// RENDER RULE
// ============================================================================

/// Predicted class → diagnosis message
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RenderRule {
    pub positive: &'static str,
    pub negative: &'static str,
}

impl RenderRule {
    pub fn render(&self, class: PredictedClass) -> &'static str {
        match class {
            PredictedClass::Positive => self.positive,
            PredictedClass::Negative => self.negative,
        }
    }
}

// ============================================================================
// DISEASE SPEC
// ============================================================================

/// Static description of one disease's inputs and output wording
#[derive(Debug, Serialize)]
pub struct DiseaseSpec {
    pub disease: Disease,
    pub features: &'static [FeatureSpec],
    pub render_rule: RenderRule,
}

impl DiseaseSpec {
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn feature_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.features.iter().map(|f| f.name)
    }

    /// Get feature by name (O(n) but features are few)
    pub fn feature(&self, name: &str) -> Option<&FeatureSpec> {
        self.features.iter().find(|f| f.name == name)
    }

    pub fn feature_index(&self, name: &str) -> Option<usize> {
        self.features.iter().position(|f| f.name == name)
    }

    pub fn layout_hash(&self) -> u32 {
        compute_layout_hash(LAYOUT_VERSION, self.disease, self.feature_names())
    }
}

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 over version, disease id and the ordered feature names
pub fn compute_layout_hash<'a>(
    version: u8,
    disease: Disease,
    names: impl IntoIterator<Item = &'a str>,
) -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[version]);
    hasher.update(disease.id().as_bytes());
    hasher.update(&[0]);

    for name in names {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Layout information for status reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub disease: Disease,
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn of(spec: &DiseaseSpec) -> Self {
        Self {
            disease: spec.disease,
            version: LAYOUT_VERSION,
            hash: spec.layout_hash(),
            feature_count: spec.feature_count(),
            feature_names: spec.feature_names().map(|s| s.to_string()).collect(),
        }
    }
}
