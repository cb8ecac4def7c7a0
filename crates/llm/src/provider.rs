use async_trait::async_trait;

/// Trait for generative-model providers — each backend implements this.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a document plus an instruction and return the model's raw
    /// response text. One shot: no retries, no streaming.
    async fn generate_from_document(
        &self,
        document: &[u8],
        media_type: &str,
        instruction: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {status} — {body}")]
    ApiError { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    ParseError(String),
    #[error("provider not configured: {0}")]
    NotConfigured(String),
}
