//! Disease handlers
//!
//! Everything a form driver needs to render one screen per disease.

use axum::{extract::{Path, State}, Json};
use medipredict_core::{Disease, FeatureSpec};
use serde::Serialize;

use crate::{AppState, AppResult};

#[derive(Debug, Serialize)]
pub struct DiseaseSummary {
    pub id: Disease,
    pub title: &'static str,
    pub feature_count: usize,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct FormField {
    #[serde(flatten)]
    pub spec: FeatureSpec,
    pub step: f64,
}

#[derive(Debug, Serialize)]
pub struct FormSchema {
    pub id: Disease,
    pub title: &'static str,
    pub available: bool,
    pub layout_hash: u32,
    pub fields: Vec<FormField>,
}

/// List diseases in menu order
pub async fn list(State(state): State<AppState>) -> Json<Vec<DiseaseSummary>> {
    let registry = state.dispatcher.registry();

    let diseases = Disease::ALL
        .iter()
        .map(|&disease| DiseaseSummary {
            id: disease,
            title: disease.title(),
            feature_count: registry.entry(disease).spec.feature_count(),
            available: registry.is_available(disease),
        })
        .collect();

    Json(diseases)
}

/// Form schema for one disease
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<FormSchema>> {
    let entry = state.dispatcher.registry().get(&id)?;
    let spec = entry.spec;

    Ok(Json(FormSchema {
        id: spec.disease,
        title: spec.disease.title(),
        available: entry.classifier.is_loaded(),
        layout_hash: spec.layout_hash(),
        fields: spec
            .features
            .iter()
            .map(|f| FormField {
                step: f.step(),
                spec: f.clone(),
            })
            .collect(),
    }))
}
