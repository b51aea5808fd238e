//! Registry tables
//!
//! Literal feature tables, one per disease, in training order.
//! Lung cancer symptom flags use 1 = No / 2 = Yes, unlike the 0/1 flags of
//! the other diseases. That is how the model was trained; keep it.

use super::layout::{DiseaseSpec, FeatureSpec, RenderRule};
use crate::disease::Disease;

// ============================================================================
// DIABETES (8)
// ============================================================================

const DIABETES_FEATURES: [FeatureSpec; 8] = [
    FeatureSpec::integer("Pregnancies", "Number of Pregnancies", 0.0, 20.0),
    FeatureSpec::integer("Glucose", "Glucose Level", 0.0, 300.0),
    FeatureSpec::integer("BloodPressure", "Blood Pressure value", 0.0, 200.0),
    FeatureSpec::integer("SkinThickness", "Skin Thickness value", 0.0, 100.0),
    FeatureSpec::integer("Insulin", "Insulin Level", 0.0, 900.0),
    FeatureSpec::real("BMI", "BMI value", 0.0, 70.0, 1),
    FeatureSpec::real("DiabetesPedigreeFunction", "Diabetes Pedigree Function value", 0.0, 2.5, 3),
    FeatureSpec::integer("Age", "Age of the Person", 0.0, 120.0),
];

pub static DIABETES: DiseaseSpec = DiseaseSpec {
    disease: Disease::Diabetes,
    features: &DIABETES_FEATURES,
    render_rule: RenderRule {
        positive: "The person is diabetic",
        negative: "The person is not diabetic",
    },
};

// ============================================================================
// HEART DISEASE (13)
// ============================================================================

const HEART_FEATURES: [FeatureSpec; 13] = [
    FeatureSpec::integer("age", "Age", 0.0, 120.0),
    FeatureSpec::flag("sex", "Sex (1 = male; 0 = female)", 0.0, 1.0),
    FeatureSpec::integer("cp", "Chest Pain types (0, 1, 2, 3)", 0.0, 3.0),
    FeatureSpec::integer("trestbps", "Resting Blood Pressure", 0.0, 250.0),
    FeatureSpec::integer("chol", "Serum Cholesterol in mg/dl", 0.0, 600.0),
    FeatureSpec::flag("fbs", "Fasting Blood Sugar > 120 mg/dl (1 = true; 0 = false)", 0.0, 1.0),
    FeatureSpec::integer("restecg", "Resting Electrocardiographic results (0, 1, 2)", 0.0, 2.0),
    FeatureSpec::integer("thalach", "Maximum Heart Rate achieved", 0.0, 250.0),
    FeatureSpec::flag("exang", "Exercise Induced Angina (1 = yes; 0 = no)", 0.0, 1.0),
    FeatureSpec::real("oldpeak", "ST depression induced by exercise", 0.0, 10.0, 1),
    FeatureSpec::integer("slope", "Slope of the peak exercise ST segment (0, 1, 2)", 0.0, 2.0),
    FeatureSpec::integer("ca", "Major vessels colored by flourosopy (0-4)", 0.0, 4.0),
    FeatureSpec::integer("thal", "Thal (0 = normal; 1 = fixed defect; 2 = reversable defect)", 0.0, 3.0),
];

pub static HEART_DISEASE: DiseaseSpec = DiseaseSpec {
    disease: Disease::HeartDisease,
    features: &HEART_FEATURES,
    render_rule: RenderRule {
        positive: "The person has heart disease",
        negative: "The person does not have heart disease",
    },
};

// ============================================================================
// PARKINSON'S (22)
// ============================================================================

const PARKINSONS_FEATURES: [FeatureSpec; 22] = [
    FeatureSpec::real("MDVP:Fo(Hz)", "MDVP:Fo(Hz)", 0.0, 500.0, 3),
    FeatureSpec::real("MDVP:Fhi(Hz)", "MDVP:Fhi(Hz)", 0.0, 600.0, 3),
    FeatureSpec::real("MDVP:Flo(Hz)", "MDVP:Flo(Hz)", 0.0, 500.0, 3),
    FeatureSpec::real("MDVP:Jitter(%)", "MDVP:Jitter(%)", 0.0, 1.0, 5),
    FeatureSpec::real("MDVP:Jitter(Abs)", "MDVP:Jitter(Abs)", 0.0, 0.01, 6),
    FeatureSpec::real("MDVP:RAP", "MDVP:RAP", 0.0, 1.0, 5),
    FeatureSpec::real("MDVP:PPQ", "MDVP:PPQ", 0.0, 1.0, 5),
    FeatureSpec::real("Jitter:DDP", "Jitter:DDP", 0.0, 1.0, 5),
    FeatureSpec::real("MDVP:Shimmer", "MDVP:Shimmer", 0.0, 1.0, 5),
    FeatureSpec::real("MDVP:Shimmer(dB)", "MDVP:Shimmer(dB)", 0.0, 5.0, 3),
    FeatureSpec::real("Shimmer:APQ3", "Shimmer:APQ3", 0.0, 1.0, 5),
    FeatureSpec::real("Shimmer:APQ5", "Shimmer:APQ5", 0.0, 1.0, 5),
    FeatureSpec::real("MDVP:APQ", "MDVP:APQ", 0.0, 1.0, 5),
    FeatureSpec::real("Shimmer:DDA", "Shimmer:DDA", 0.0, 1.0, 5),
    FeatureSpec::real("NHR", "NHR", 0.0, 1.0, 5),
    FeatureSpec::real("HNR", "HNR", 0.0, 50.0, 3),
    FeatureSpec::real("RPDE", "RPDE", 0.0, 1.0, 6),
    FeatureSpec::real("DFA", "DFA", 0.0, 1.0, 6),
    FeatureSpec::real("spread1", "spread1", -10.0, 0.0, 6),
    FeatureSpec::real("spread2", "spread2", 0.0, 1.0, 6),
    FeatureSpec::real("D2", "D2", 0.0, 5.0, 6),
    FeatureSpec::real("PPE", "PPE", 0.0, 1.0, 6),
];

pub static PARKINSONS: DiseaseSpec = DiseaseSpec {
    disease: Disease::Parkinsons,
    features: &PARKINSONS_FEATURES,
    render_rule: RenderRule {
        positive: "The person has Parkinson's disease",
        negative: "The person does not have Parkinson's disease",
    },
};

// ============================================================================
// LUNG CANCER (15)
// ============================================================================

const LUNG_CANCER_FEATURES: [FeatureSpec; 15] = [
    FeatureSpec::flag("GENDER", "Gender (1 = Male; 0 = Female)", 0.0, 1.0),
    FeatureSpec::integer("AGE", "Age", 0.0, 120.0),
    FeatureSpec::flag("SMOKING", "Smoking (2 = Yes; 1 = No)", 1.0, 2.0),
    FeatureSpec::flag("YELLOW_FINGERS", "Yellow Fingers (2 = Yes; 1 = No)", 1.0, 2.0),
    FeatureSpec::flag("ANXIETY", "Anxiety (2 = Yes; 1 = No)", 1.0, 2.0),
    FeatureSpec::flag("PEER_PRESSURE", "Peer Pressure (2 = Yes; 1 = No)", 1.0, 2.0),
    FeatureSpec::flag("CHRONIC_DISEASE", "Chronic Disease (2 = Yes; 1 = No)", 1.0, 2.0),
    FeatureSpec::flag("FATIGUE", "Fatigue (2 = Yes; 1 = No)", 1.0, 2.0),
    FeatureSpec::flag("ALLERGY", "Allergy (2 = Yes; 1 = No)", 1.0, 2.0),
    FeatureSpec::flag("WHEEZING", "Wheezing (2 = Yes; 1 = No)", 1.0, 2.0),
    FeatureSpec::flag("ALCOHOL_CONSUMING", "Alcohol Consuming (2 = Yes; 1 = No)", 1.0, 2.0),
    FeatureSpec::flag("COUGHING", "Coughing (2 = Yes; 1 = No)", 1.0, 2.0),
    FeatureSpec::flag("SHORTNESS_OF_BREATH", "Shortness of Breath (2 = Yes; 1 = No)", 1.0, 2.0),
    FeatureSpec::flag("SWALLOWING_DIFFICULTY", "Swallowing Difficulty (2 = Yes; 1 = No)", 1.0, 2.0),
    FeatureSpec::flag("CHEST_PAIN", "Chest Pain (2 = Yes; 1 = No)", 1.0, 2.0),
];

pub static LUNG_CANCER: DiseaseSpec = DiseaseSpec {
    disease: Disease::LungCancer,
    features: &LUNG_CANCER_FEATURES,
    render_rule: RenderRule {
        positive: "The person has lung cancer disease",
        negative: "The person does not have lung cancer disease",
    },
};

// ============================================================================
// HYPO-THYROID (7)
// ============================================================================

const THYROID_FEATURES: [FeatureSpec; 7] = [
    FeatureSpec::integer("age", "Age", 0.0, 120.0),
    FeatureSpec::flag("sex", "Sex (1 = Male; 0 = Female)", 0.0, 1.0),
    FeatureSpec::flag("on_thyroxine", "On Thyroxine (1 = Yes; 0 = No)", 0.0, 1.0),
    FeatureSpec::real("tsh", "TSH Level", 0.0, 600.0, 2),
    FeatureSpec::flag("t3_measured", "T3 Measured (1 = Yes; 0 = No)", 0.0, 1.0),
    FeatureSpec::real("t3", "T3 Level", 0.0, 15.0, 2),
    FeatureSpec::real("tt4", "TT4 Level", 0.0, 500.0, 1),
];

pub static THYROID: DiseaseSpec = DiseaseSpec {
    disease: Disease::Thyroid,
    features: &THYROID_FEATURES,
    render_rule: RenderRule {
        positive: "The person has Hypo-Thyroid disease",
        negative: "The person does not have Hypo-Thyroid disease",
    },
};

/// Static spec of a disease
pub fn spec_for(disease: Disease) -> &'static DiseaseSpec {
    match disease {
        Disease::Diabetes => &DIABETES,
        Disease::HeartDisease => &HEART_DISEASE,
        Disease::Parkinsons => &PARKINSONS,
        Disease::LungCancer => &LUNG_CANCER,
        Disease::Thyroid => &THYROID,
    }
}
