use tracing::{debug, info};

use cardbox_core::config::LlmConfig;
use cardbox_core::Flashcard;

use crate::normalize::{normalize, NormalizeError};
use crate::provider::{LlmError, LlmProvider};

/// Sends a document to an LLM with a flashcard instruction and normalizes
/// the reply into validated cards.
pub struct FlashcardGenerator {
    provider: Box<dyn LlmProvider>,
    temperature: f32,
    max_tokens: u32,
}

impl FlashcardGenerator {
    pub fn new(provider: Box<dyn LlmProvider>, temperature: f32, max_tokens: u32) -> Self {
        Self {
            provider,
            temperature,
            max_tokens,
        }
    }

    /// Build from config, creating the appropriate provider.
    pub fn from_config(llm_config: &LlmConfig) -> Result<Self, LlmError> {
        let provider = crate::providers::create_provider(llm_config)?;
        Ok(Self::new(
            provider,
            llm_config.temperature,
            llm_config.max_tokens,
        ))
    }

    /// One-shot generation: document in, 1..=num_cards validated cards out.
    /// A single model call either succeeds or the whole request fails.
    pub async fn generate(
        &self,
        document: &[u8],
        media_type: &str,
        num_cards: u8,
    ) -> Result<Vec<Flashcard>, GenerateError> {
        let instruction = build_instruction(num_cards);

        info!(
            "Requesting {} flashcards from a {} byte document",
            num_cards,
            document.len()
        );

        let response = self
            .provider
            .generate_from_document(
                document,
                media_type,
                &instruction,
                self.temperature,
                self.max_tokens,
            )
            .await?;

        debug!("Model response: {} chars", response.len());

        let mut cards = normalize(&response)?;

        // The model occasionally over-delivers; keep the leading cards.
        cards.truncate(num_cards as usize);

        info!("Generated {} flashcards", cards.len());
        Ok(cards)
    }
}

/// The instruction sent alongside the document. The JSON contract in here
/// (one object with a `flashcards` array of question/answer objects) is
/// part of the model interface — keep it stable.
fn build_instruction(num_cards: u8) -> String {
    format!(
        "Create {num_cards} flashcards from this PDF. \
         Respond ONLY with valid JSON, no explanation, no markdown. \
         The output must be a single JSON object with a \"flashcards\" key \
         containing an array of objects, each with a \"question\" string and \
         an \"answer\" string."
    )
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("invalid model output: {0}")]
    Normalize(#[from] NormalizeError),
}
