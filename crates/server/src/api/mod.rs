//! API endpoint modules. Shared response types live here in mod.rs.

pub mod doc;
pub mod flashcards;
pub mod health;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

// ── Shared types ─────────────────────────────────────────────────

/// Client-visible error payload. Messages are fixed, generic strings;
/// diagnostic detail stays in the server logs.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: &'static str,
}

pub(crate) fn bad_request(message: &'static str) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
}

pub(crate) fn internal_error(message: &'static str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
}

// ── Re-exports ───────────────────────────────────────────────────

pub use flashcards::generate_flashcards;
pub use health::health;
