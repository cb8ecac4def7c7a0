use cardbox_llm::FlashcardGenerator;

pub struct AppState {
    /// `None` when no provider API key is configured — the upload
    /// endpoint answers 503 instead of failing at startup.
    pub generator: Option<FlashcardGenerator>,
    /// Provider name for the health endpoint ("gemini", "anthropic").
    pub provider: String,
}
