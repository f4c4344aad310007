//! Public types for the label analysis API
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub medication_name: String,
    pub dosage_strength: String,
    pub directions: String,
    pub frequency: String,
}
