//! Router for the label analysis API

use std::sync::{Arc, RwLock};

use axum::{Router, extract::Multipart, extract::State, response::Json};

use super::public;
use crate::api::routes::run_extraction;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// Extract the structured medication fields from an uploaded label image.
async fn analyze_handler(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Json<public::AnalyzeResponse>, crate::api::public::ApiError> {
    let extraction = run_extraction(&state, multipart).await?;

    Ok(Json(public::AnalyzeResponse {
        medication_name: extraction.medication_name,
        dosage_strength: extraction.dosage_strength,
        directions: extraction.directions,
        frequency: extraction.frequency,
    }))
}

/// Create the analyze router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::post(analyze_handler))
}
