//! Router for the schedule derivation API

use std::sync::{Arc, RwLock};

use axum::{Router, extract::Multipart, extract::State, response::Json};

use super::public;
use crate::api::routes::run_extraction;
use crate::api::state::AppState;
use crate::schedule::derive_schedule;

type SharedState = Arc<RwLock<AppState>>;

/// Extract the label fields from an uploaded image and derive the daily
/// reminder calendar from the directions text.
async fn schedule_handler(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Json<public::ScheduleResponse>, crate::api::public::ApiError> {
    let extraction = run_extraction(&state, multipart).await?;

    // The next-occurrence computation runs in local wall-clock time with
    // the offset captured now; the rendered document is all UTC.
    let now_local = chrono::Local::now().fixed_offset();
    let stamp = chrono::Utc::now();
    let derived = derive_schedule(&extraction, now_local, stamp);

    Ok(Json(public::ScheduleResponse {
        medication_name: extraction.medication_name,
        dosage_strength: extraction.dosage_strength,
        directions: extraction.directions,
        frequency: extraction.frequency,
        calendar: derived.calendar,
        status: derived.status.to_string(),
    }))
}

/// Create the schedule router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::post(schedule_handler))
}
