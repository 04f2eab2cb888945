use axum::Json;
use axum::extract::State;
use mindscope_core::models::instrument::Instrument;
use mindscope_core::models::question::CatalogEntry;
use mindscope_instruments::all_instruments;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: Instrument,
    name: String,
    question_count: usize,
}

#[derive(Serialize)]
pub struct CatalogResponse {
    version: String,
    question_count: usize,
    instruments: Vec<InstrumentSummary>,
    entries: Vec<CatalogEntry>,
}

/// The full questionnaire in administration order, display numbers included.
pub async fn get_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    let catalog = &state.catalog;
    let instruments = all_instruments()
        .iter()
        .map(|def| InstrumentSummary {
            id: def.instrument(),
            name: def.name().to_string(),
            question_count: catalog.questions_for(def.instrument()).count(),
        })
        .collect();

    Json(CatalogResponse {
        version: catalog.version().to_string(),
        question_count: catalog.question_count(),
        instruments,
        entries: catalog.entries().to_vec(),
    })
}
