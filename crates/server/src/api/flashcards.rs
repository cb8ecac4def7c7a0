//! Flashcard generation endpoint: multipart PDF in, validated cards out.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::{debug, error, info};

use cardbox_core::Flashcard;
use cardbox_llm::{GenerateError, NormalizeError};

use crate::state::AppState;

use super::{bad_request, internal_error, ErrorResponse};

pub const MIN_CARDS: u8 = 1;
pub const MAX_CARDS: u8 = 20;
pub const DEFAULT_NUM_CARDS: u8 = 5;

const FALLBACK_MEDIA_TYPE: &str = "application/pdf";

#[derive(Serialize, utoipa::ToSchema)]
pub struct FlashcardsResponse {
    #[schema(value_type = Vec<Object>)]
    pub flashcards: Vec<Flashcard>,
}

struct UploadedFile {
    filename: String,
    media_type: String,
    bytes: Vec<u8>,
}

/// Generate flashcards from an uploaded PDF
///
/// Accepts multipart/form-data with a `file` field (PDF) and an optional
/// `numCards` field (1-20, default 5). The document goes to the configured
/// generative-model provider in a single call; the reply is normalized into
/// validated question/answer pairs.
#[utoipa::path(
    post,
    path = "/flashcards",
    tag = "Flashcards",
    request_body(content_type = "multipart/form-data", description = "PDF upload with optional numCards"),
    responses(
        (status = 200, description = "Generated flashcards", body = FlashcardsResponse),
        (status = 400, description = "Missing file or invalid card count", body = ErrorResponse),
        (status = 500, description = "Model call or response normalization failed", body = ErrorResponse),
        (status = 503, description = "No provider configured", body = ErrorResponse)
    )
)]
pub async fn generate_flashcards(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<FlashcardsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut file: Option<UploadedFile> = None;
    let mut num_cards_raw: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| {
            debug!("Multipart decode error: {e}");
            bad_request("No file uploaded")
        })?
    {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("unnamed").to_string();
                let media_type = field
                    .content_type()
                    .unwrap_or(FALLBACK_MEDIA_TYPE)
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        debug!("Failed to read file field: {e}");
                        bad_request("No file uploaded")
                    })?
                    .to_vec();
                file = Some(UploadedFile {
                    filename,
                    media_type,
                    bytes,
                });
            }
            Some("numCards") => {
                num_cards_raw = field.text().await.ok();
            }
            // Unknown fields are ignored.
            _ => {}
        }
    }

    // File presence wins over card-count validation: a missing file is
    // reported regardless of what else the form carried.
    let file = match file {
        Some(f) if !f.bytes.is_empty() => f,
        _ => return Err(bad_request("No file uploaded")),
    };

    let num_cards = match num_cards_raw {
        None => DEFAULT_NUM_CARDS,
        Some(raw) => raw
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|n| (MIN_CARDS..=MAX_CARDS).contains(n))
            .ok_or_else(|| bad_request("Number of cards must be between 1 and 20"))?,
    };

    let generator = state.generator.as_ref().ok_or((
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: "LLM provider not configured. Set LLM_PROVIDER and an API key.",
        }),
    ))?;

    info!(
        "Generating {} flashcards from '{}' ({} bytes, {})",
        num_cards,
        file.filename,
        file.bytes.len(),
        file.media_type,
    );

    let cards = generator
        .generate(&file.bytes, &file.media_type, num_cards)
        .await
        .map_err(|e| match e {
            GenerateError::Llm(err) => {
                error!("Model call failed for '{}': {err}", file.filename);
                internal_error("Failed to process PDF")
            }
            GenerateError::Normalize(NormalizeError::Empty) => {
                error!("Model returned no usable flashcards for '{}'", file.filename);
                internal_error("No valid flashcards generated")
            }
            GenerateError::Normalize(err) => {
                // Raw model text stays out of the response; log it for diagnosis.
                if let NormalizeError::Parse { ref raw, .. } = err {
                    debug!("Unparseable model output: {raw}");
                }
                error!("Model output failed normalization for '{}': {err}", file.filename);
                internal_error("Invalid AI response format")
            }
        })?;

    Ok(Json(FlashcardsResponse { flashcards: cards }))
}
