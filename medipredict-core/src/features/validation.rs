//! Input validation
//!
//! Server-side check of every submitted value against its FeatureSpec.
//! Callable on its own so correctness never depends on form widgets.
//! Values are checked, never clamped or rounded.

use super::vector::FeatureVector;
use super::FieldValues;
use crate::error::{DiagnosisError, DispatchResult};
use crate::registry::{DiseaseSpec, FeatureSpec, ValueType};

/// Check one value against its bounds and type
pub fn validate_value(feature: &FeatureSpec, value: f64) -> DispatchResult<()> {
    if !feature.contains(value) {
        return Err(DiagnosisError::OutOfRange {
            field: feature.name.to_string(),
            value,
            min: feature.min,
            max: feature.max,
        });
    }

    if feature.value_type == ValueType::Integer && value.fract() != 0.0 {
        return Err(DiagnosisError::NotAnInteger {
            field: feature.name.to_string(),
            value,
        });
    }

    Ok(())
}

/// Check that every declared feature is present and valid.
/// Fields the disease does not declare are ignored.
pub fn validate_fields(spec: &DiseaseSpec, fields: &FieldValues) -> DispatchResult<()> {
    for feature in spec.features {
        validate_value(feature, lookup(spec, feature, fields)?)?;
    }
    Ok(())
}

/// Validate and build the vector in `spec.features` order
pub fn assemble(spec: &DiseaseSpec, fields: &FieldValues) -> DispatchResult<FeatureVector> {
    let mut vector = FeatureVector::with_capacity(spec);

    for feature in spec.features {
        let value = lookup(spec, feature, fields)?;
        validate_value(feature, value)?;
        vector.push(value);
    }

    if fields.len() > spec.feature_count() {
        let extra: Vec<&str> = fields
            .keys()
            .map(String::as_str)
            .filter(|k| spec.feature(k).is_none())
            .collect();
        log::debug!("{}: ignoring undeclared fields {:?}", spec.disease, extra);
    }

    Ok(vector)
}

fn lookup(spec: &DiseaseSpec, feature: &FeatureSpec, fields: &FieldValues) -> DispatchResult<f64> {
    fields
        .get(feature.name)
        .copied()
        .ok_or_else(|| DiagnosisError::MissingField {
            disease: spec.disease,
            field: feature.name.to_string(),
        })
}
