//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use axum::Router;
use axum::body::Body;
use serde_json::{Value, json};

use mediscan::api::AppState;
use mediscan::api::app;
use mediscan::core::AppConfig;

/// Boundary used by every hand-built multipart request in the tests.
pub const BOUNDARY: &str = "test-boundary-7e58";

/// Creates a test application router with the extractor pointed at the
/// given base URL (a mockito server in practice).
pub fn test_app(gemini_api_url: &str) -> Router {
    let app_config = AppConfig {
        gemini_api_url: gemini_api_url.to_string(),
        gemini_model: String::from("gemini-2.5-flash"),
        gemini_api_key: Some(String::from("test-api-key")),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(RwLock::new(app_state)))
}

/// Creates a test application router with no extractor credential set.
pub fn test_app_without_key() -> Router {
    let app_config = AppConfig {
        gemini_api_url: String::from("http://localhost:1"),
        gemini_model: String::from("gemini-2.5-flash"),
        gemini_api_key: None,
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(RwLock::new(app_state)))
}

/// Multipart body with a single file field under the given name.
pub fn multipart_body(field_name: &str, file_bytes: &[u8], content_type: &str) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"label.jpg\"\r\nContent-Type: {}\r\n\r\n",
            field_name, content_type
        )
        .as_bytes(),
    );
    body.extend_from_slice(file_bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// The `content-type` header value matching [`multipart_body`].
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

/// Canned Gemini generateContent response wrapping the given extraction
/// fields as the structured output text.
pub fn gemini_response_body(fields: &Value) -> String {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": fields.to_string() }]
            }
        }]
    })
    .to_string()
}

/// Extraction fields for the canonical twice-daily scenario.
pub fn lipitor_fields() -> Value {
    json!({
        "medication_name": "Lipitor",
        "dosage_strength": "10 MG TAB",
        "directions": "TAKE 1 TABLET TWICE DAILY",
        "frequency": "TWICE DAILY"
    })
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body should be utf-8")
}
