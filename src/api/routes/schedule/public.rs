//! Public types for the schedule derivation API
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub medication_name: String,
    pub dosage_strength: String,
    pub directions: String,
    pub frequency: String,
    /// Exportable iCalendar document, absent when no dosing frequency could
    /// be recognized in the directions.
    pub calendar: Option<String>,
    pub status: String,
}
