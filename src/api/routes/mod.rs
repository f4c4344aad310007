//! API routes module

pub mod analyze;
pub mod schedule;

use std::sync::{Arc, RwLock};

use axum::Router;
use axum::extract::Multipart;

use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::core::AppConfig;
use crate::gemini::{ExtractionResult, extract_label};

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Label extraction routes
        .nest("/analyze", analyze::router())
        // Schedule derivation routes
        .nest("/schedule", schedule::router())
}

/// Pull the uploaded image out of the multipart payload. The declared
/// content type defaults to `image/jpeg` when the client leaves it unset.
async fn read_image_upload(mut multipart: Multipart) -> Result<(Vec<u8>, String), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::bad_request(format!("Invalid multipart payload: {}", err)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let mime_type = field.content_type().unwrap_or("image/jpeg").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|err| ApiError::bad_request(format!("Failed to read image field: {}", err)))?;

        if bytes.is_empty() {
            return Err(ApiError::bad_request("Uploaded image file is empty."));
        }

        return Ok((bytes.to_vec(), mime_type));
    }

    Err(ApiError::bad_request(
        "No image file provided in the request payload.",
    ))
}

/// Shared request path for both routes: reject unconfigured deployments
/// before any external call, read the upload, run one extraction.
pub(crate) async fn run_extraction(
    state: &SharedState,
    multipart: Multipart,
) -> Result<ExtractionResult, ApiError> {
    let AppConfig {
        gemini_api_url,
        gemini_model,
        gemini_api_key,
    } = {
        let shared_state = state.read().expect("Unable to read shared state");
        shared_state.config.clone()
    };

    let api_key = gemini_api_key.ok_or_else(|| {
        ApiError::configuration("GEMINI_API_KEY is missing. Set the environment variable.")
    })?;

    let (image_bytes, mime_type) = read_image_upload(multipart).await?;

    let extraction = extract_label(
        &gemini_api_url,
        &api_key,
        &gemini_model,
        &image_bytes,
        &mime_type,
    )
    .await?;

    Ok(extraction)
}
