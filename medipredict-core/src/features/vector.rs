//! Feature Vector - Ordered classifier input
//!
//! Only `validation::assemble` builds one, so a vector always holds every
//! feature of its disease, validated, in table order.

use serde::Serialize;

use crate::disease::Disease;
use crate::registry::{spec_for, DiseaseSpec};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    disease: Disease,
    /// Layout hash of the spec it was assembled from
    layout_hash: u32,
    values: Vec<f64>,
}

impl FeatureVector {
    pub(crate) fn with_capacity(spec: &DiseaseSpec) -> Self {
        Self {
            disease: spec.disease,
            layout_hash: spec.layout_hash(),
            values: Vec::with_capacity(spec.feature_count()),
        }
    }

    pub(crate) fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn disease(&self) -> Disease {
        self.disease
    }

    pub fn layout_hash(&self) -> u32 {
        self.layout_hash
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        spec_for(self.disease)
            .feature_index(name)
            .and_then(|i| self.get(i))
    }

    pub fn feature_names(&self) -> impl Iterator<Item = &'static str> {
        spec_for(self.disease).feature_names()
    }

    /// Convert to JSON for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "disease": self.disease,
            "layout_hash": self.layout_hash,
            "values": self.values,
            "named_values": self.feature_names()
                .zip(self.values.iter())
                .map(|(name, value)| (name.to_string(), serde_json::Value::from(*value)))
                .collect::<serde_json::Map<_, _>>(),
        })
    }
}

impl AsRef<[f64]> for FeatureVector {
    fn as_ref(&self) -> &[f64] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thyroid_vector() -> FeatureVector {
        let spec = spec_for(Disease::Thyroid);
        let mut vector = FeatureVector::with_capacity(spec);
        for v in [45.0, 0.0, 1.0, 2.5, 1.0, 1.8, 95.0] {
            vector.push(v);
        }
        vector
    }

    #[test]
    fn test_lookup_by_name_and_index() {
        let vector = thyroid_vector();
        assert_eq!(vector.len(), 7);
        assert_eq!(vector.get(3), Some(2.5));
        assert_eq!(vector.get_by_name("tsh"), Some(2.5));
        assert_eq!(vector.get_by_name("tt4"), Some(95.0));
        assert_eq!(vector.get_by_name("Glucose"), None);
        assert_eq!(vector.get(7), None);
    }

    #[test]
    fn test_carries_layout_hash() {
        let vector = thyroid_vector();
        assert_eq!(vector.disease(), Disease::Thyroid);
        assert_eq!(vector.layout_hash(), spec_for(Disease::Thyroid).layout_hash());
    }

    #[test]
    fn test_to_log_entry() {
        let log = thyroid_vector().to_log_entry();
        assert_eq!(log["disease"], "thyroid");
        assert_eq!(log["values"].as_array().unwrap().len(), 7);
        assert_eq!(log["named_values"]["on_thyroxine"], 1.0);
        assert!(log["layout_hash"].as_u64().is_some());
    }
}
