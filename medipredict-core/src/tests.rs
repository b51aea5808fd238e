//! Integration Tests for the predict pipeline
//!
//! Registry + validation + classifiers + dispatcher working together.

#[cfg(test)]
mod integration_tests {
    use std::fs;
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use crate::{
        model::{load_registry, ModelConfig},
        registry::spec_for,
        Classifier, ClassifierError, DiagnosisError, Disease, Dispatcher, FieldValues, Registry,
    };

    fn fields(pairs: &[(&str, f64)]) -> FieldValues {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn diabetes_fields() -> FieldValues {
        fields(&[
            ("Pregnancies", 2.0),
            ("Glucose", 120.0),
            ("BloodPressure", 70.0),
            ("SkinThickness", 20.0),
            ("Insulin", 80.0),
            ("BMI", 25.0),
            ("DiabetesPedigreeFunction", 0.5),
            ("Age", 30.0),
        ])
    }

    /// Every declared field at its lower bound
    fn minimal_fields(disease: Disease) -> FieldValues {
        spec_for(disease)
            .features
            .iter()
            .map(|f| (f.name.to_string(), f.min))
            .collect()
    }

    fn constant(label: i64) -> Arc<dyn Classifier> {
        Arc::new(move |_: &[f64]| -> Result<i64, ClassifierError> { Ok(label) })
    }

    fn all_bound(label: i64) -> Dispatcher {
        let builder = Disease::ALL
            .iter()
            .fold(Registry::builder(), |b, d| b.bind(*d, constant(label)));
        Dispatcher::new(Arc::new(builder.build()))
    }

    /// Diabetes scenario: the classifier sees exactly the table order
    #[test]
    fn test_diabetes_vector_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let recorder: Arc<dyn Classifier> = Arc::new(move |v: &[f64]| -> Result<i64, ClassifierError> {
            sink.lock().unwrap().push(v.to_vec());
            Ok(1)
        });
        let registry = Registry::builder().bind(Disease::Diabetes, recorder).build();
        let dispatcher = Dispatcher::new(Arc::new(registry));

        let mut input = diabetes_fields();
        input.insert("Unrelated".to_string(), 1.0);
        let result = dispatcher.predict("diabetes", &input).unwrap();

        assert_eq!(result.message, "The person is diabetic");
        let calls = seen.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec![2.0, 120.0, 70.0, 20.0, 80.0, 25.0, 0.5, 30.0]);
    }

    /// Both render branches for every disease
    #[test]
    fn test_render_rules_each_branch() {
        let positive = all_bound(1);
        let negative = all_bound(0);

        let expected = [
            (Disease::Diabetes, "The person is diabetic", "The person is not diabetic"),
            (Disease::HeartDisease, "The person has heart disease", "The person does not have heart disease"),
            (
                Disease::Parkinsons,
                "The person has Parkinson's disease",
                "The person does not have Parkinson's disease",
            ),
            (
                Disease::LungCancer,
                "The person has lung cancer disease",
                "The person does not have lung cancer disease",
            ),
            (
                Disease::Thyroid,
                "The person has Hypo-Thyroid disease",
                "The person does not have Hypo-Thyroid disease",
            ),
        ];

        for (disease, yes, no) in expected {
            let input = minimal_fields(disease);

            let hit = positive.predict(disease.id(), &input).unwrap();
            assert_eq!(hit.disease_id, disease);
            assert_eq!(hit.predicted_class, 1);
            assert!(hit.positive);
            assert_eq!(hit.message, yes);

            let miss = negative.predict(disease.id(), &input).unwrap();
            assert_eq!(miss.predicted_class, 0);
            assert!(!miss.positive);
            assert_eq!(miss.message, no);
        }
    }

    #[test]
    fn test_heart_disease_messages() {
        let input = minimal_fields(Disease::HeartDisease);
        let has = all_bound(1).predict("heart_disease", &input).unwrap();
        let has_not = all_bound(0).predict("heart_disease", &input).unwrap();
        assert!(has.message.ends_with("has heart disease"));
        assert!(has_not.message.ends_with("does not have heart disease"));
    }

    #[test]
    fn test_unknown_disease() {
        let err = all_bound(0).predict("covid", &diabetes_fields()).unwrap_err();
        assert_eq!(err, DiagnosisError::UnknownDisease("covid".to_string()));
    }

    #[test]
    fn test_deterministic() {
        let threshold: Arc<dyn Classifier> = Arc::new(|v: &[f64]| -> Result<i64, ClassifierError> {
            Ok(if v[1] > 140.0 { 1 } else { 0 })
        });
        let dispatcher = Dispatcher::new(Arc::new(
            Registry::builder().bind(Disease::Diabetes, threshold).build(),
        ));

        let first = dispatcher.predict("diabetes", &diabetes_fields()).unwrap();
        for _ in 0..10 {
            assert_eq!(dispatcher.predict("diabetes", &diabetes_fields()).unwrap(), first);
        }
    }

    /// A panicking backend is reported, and later requests are unaffected
    #[test]
    fn test_panic_is_contained_and_stateless() {
        let flaky: Arc<dyn Classifier> = Arc::new(|v: &[f64]| -> Result<i64, ClassifierError> {
            if v[0] == 13.0 {
                panic!("corrupted model state");
            }
            Ok(0)
        });
        let registry = Registry::builder()
            .bind(Disease::Diabetes, flaky)
            .bind(Disease::Thyroid, constant(1))
            .build();
        let dispatcher = Dispatcher::new(Arc::new(registry));

        let before = dispatcher.predict("diabetes", &diabetes_fields()).unwrap();

        let mut poisoned = diabetes_fields();
        poisoned.insert("Pregnancies".to_string(), 13.0);
        match dispatcher.predict("diabetes", &poisoned) {
            Err(DiagnosisError::PredictionBackend { disease, cause }) => {
                assert_eq!(disease, Disease::Diabetes);
                assert!(cause.contains("corrupted model state"));
            }
            other => panic!("expected backend error, got {:?}", other),
        }

        assert_eq!(dispatcher.predict("diabetes", &diabetes_fields()).unwrap(), before);
        assert!(dispatcher.predict("thyroid", &minimal_fields(Disease::Thyroid)).is_ok());
    }

    #[test]
    fn test_out_of_range_reports_value_and_bound() {
        let mut input = diabetes_fields();
        input.insert("Age".to_string(), 121.0);
        let err = all_bound(0).predict("diabetes", &input).unwrap_err();
        assert_eq!(
            err,
            DiagnosisError::OutOfRange {
                field: "Age".to_string(),
                value: 121.0,
                min: 0.0,
                max: 120.0,
            }
        );
    }

    /// Artifacts on disk through to a diagnosis
    #[test]
    fn test_loaded_artifacts_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = json!({
            "format_version": 1,
            "disease": "diabetes",
            "layout_version": 1,
            "feature_names": [
                "Pregnancies", "Glucose", "BloodPressure", "SkinThickness",
                "Insulin", "BMI", "DiabetesPedigreeFunction", "Age"
            ],
            "mean": [3.8, 120.9, 69.1, 20.5, 79.8, 32.0, 0.47, 33.2],
            "scale": [3.4, 32.0, 19.4, 16.0, 115.2, 7.9, 0.33, 11.8],
            "coefficients": [0.4, 1.1, -0.25, 0.0, -0.14, 0.7, 0.3, 0.17],
            "intercept": -0.87,
            "threshold": 0.5
        });
        fs::write(dir.path().join("diabetes_model.json"), artifact.to_string()).unwrap();

        let registry = load_registry(&ModelConfig::new(dir.path()));
        let dispatcher = Dispatcher::new(Arc::new(registry));

        let low = dispatcher.predict("diabetes", &diabetes_fields()).unwrap();
        assert_eq!(low.predicted_class, 0);

        let mut high = diabetes_fields();
        high.insert("Glucose".to_string(), 199.0);
        high.insert("BMI".to_string(), 45.0);
        high.insert("Pregnancies".to_string(), 10.0);
        let high = dispatcher.predict("diabetes", &high).unwrap();
        assert_eq!(high.predicted_class, 1);
        assert_eq!(high.message, "The person is diabetic");

        // no artifact for the others
        match dispatcher.predict("thyroid", &minimal_fields(Disease::Thyroid)) {
            Err(DiagnosisError::PredictionBackend { cause, .. }) => {
                assert!(cause.contains("model artifact not found"));
            }
            other => panic!("expected backend error, got {:?}", other),
        }
    }

    #[test]
    fn test_dispatcher_shared_across_threads() {
        let dispatcher = all_bound(1);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let d = dispatcher.clone();
                std::thread::spawn(move || d.predict("lung_cancer", &minimal_fields(Disease::LungCancer)))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap().predicted_class, 1);
        }
    }
}
