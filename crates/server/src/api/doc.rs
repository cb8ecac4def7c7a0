//! OpenAPI documentation aggregator.
//!
//! Collects the `#[utoipa::path]`-annotated handlers and `ToSchema`-derived
//! types into a single OpenAPI spec, served via Scalar UI at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "cardbox API",
        version = "0.1.0",
        description = "Flashcard generation from uploaded PDFs via a hosted generative-model API.",
    ),
    tags(
        (name = "Health", description = "Server readiness and provider status"),
        (name = "Flashcards", description = "PDF upload and flashcard generation"),
    ),
    paths(
        crate::api::health::health,
        crate::api::flashcards::generate_flashcards,
    ),
    components(schemas(
        crate::api::ErrorResponse,
        crate::api::health::HealthResponse,
        crate::api::flashcards::FlashcardsResponse,
    ))
)]
pub struct ApiDoc;
