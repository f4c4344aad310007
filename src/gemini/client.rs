//! Gemini API client for extracting structured medication data from a
//! photograph of a prescription label.

use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Structured fields extracted from a single label image. Immutable once
/// produced; the schedule deriver consumes it as-is.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub medication_name: String,
    pub dosage_strength: String,
    pub directions: String,
    /// Advisory dosing category reported by the model. The directions text
    /// is the source of truth for scheduling.
    pub frequency: String,
}

const EXTRACTION_PROMPT: &str = "\
Analyze the provided image of a medication label. Extract four specific pieces of information.
1. Medication Name
2. Medication Dose/Strength
3. Directions for Use (should be fully capitalized and start with an action verb)
4. Dosing Frequency";

/// Structured-output schema sent with every request. All four fields are
/// required so a successful extraction always has them present.
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "medication_name": {
                "type": "STRING",
                "description": "The full, unambiguous name of the medication (e.g., Lipitor, Amoxicillin)."
            },
            "dosage_strength": {
                "type": "STRING",
                "description": "The strength and form of the medication (e.g., 500 MG CAP, 2.5mg Tablet)."
            },
            "directions": {
                "type": "STRING",
                "description": "The exact, fully capitalized instructions for use from the label (e.g., TAKE 1 CAPSULE TWICE DAILY)."
            },
            "frequency": {
                "type": "STRING",
                "description": "The dosing frequency extracted from the directions. Must be one of: 'ONCE DAILY', 'TWICE DAILY', 'THREE TIMES A DAY', or 'AS NEEDED/OTHER'."
            }
        },
        "required": ["medication_name", "dosage_strength", "directions", "frequency"]
    })
}

// Typed view of the generateContent response. Only the path down to the
// structured output text is modeled.
#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    text: Option<String>,
}

/// Send one label image to the Gemini API and parse the structured output.
///
/// The base URL is configurable so tests can point at a local mock server.
/// Output is requested at temperature 0 with a bounded length so repeated
/// extractions of the same label are stable.
pub async fn extract_label(
    api_url: &str,
    api_key: &str,
    model: &str,
    image_bytes: &[u8],
    mime_type: &str,
) -> Result<ExtractionResult> {
    let url = format!(
        "{}/v1beta/models/{}:generateContent?key={}",
        api_url.trim_end_matches('/'),
        model,
        api_key
    );

    let payload = json!({
        "contents": [{
            "parts": [
                { "text": EXTRACTION_PROMPT },
                { "inlineData": { "mimeType": mime_type, "data": STANDARD.encode(image_bytes) } }
            ]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
            "maxOutputTokens": 2048,
            "temperature": 0.0
        }
    });

    let response = reqwest::Client::new()
        .post(url)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60))
        .json(&payload)
        .send()
        .await?;

    if !response.status().is_success() {
        bail!(
            "Gemini API request failed with status {}: {}",
            response.status(),
            response.text().await.unwrap_or_default()
        );
    }

    let body: GenerateContentResponse = response.json().await?;
    let text = body
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| anyhow!("Gemini API returned an empty response"))?;

    let result = serde_json::from_str(&text)?;
    Ok(result)
}
