//! Features Module - Validation & vector assembly
//!
//! Turns the loose name → value mapping submitted by a form into the ordered
//! vector a classifier was trained on.

pub mod validation;
pub mod vector;

use std::collections::HashMap;

/// Submitted form values, keyed by feature name
pub type FieldValues = HashMap<String, f64>;

// Re-export common types
pub use validation::{assemble, validate_fields, validate_value};
pub use vector::FeatureVector;
