pub mod claude;
pub mod gemini;

use cardbox_core::config::LlmConfig;

use crate::provider::{LlmError, LlmProvider};

/// Create the appropriate LLM provider based on config.
pub fn create_provider(llm_config: &LlmConfig) -> Result<Box<dyn LlmProvider>, LlmError> {
    match llm_config.provider.as_str() {
        "gemini" => {
            let api_key = llm_config
                .gemini_api_key
                .as_ref()
                .ok_or_else(|| LlmError::NotConfigured("GEMINI_API_KEY not set".into()))?;
            Ok(Box::new(gemini::GeminiProvider::new(
                api_key.clone(),
                llm_config.gemini_model.clone(),
            )))
        }
        "anthropic" | "claude" => {
            let api_key = llm_config
                .anthropic_api_key
                .as_ref()
                .ok_or_else(|| LlmError::NotConfigured("ANTHROPIC_API_KEY not set".into()))?;
            Ok(Box::new(claude::ClaudeProvider::new(
                api_key.clone(),
                llm_config.anthropic_model.clone(),
            )))
        }
        other => Err(LlmError::NotConfigured(format!(
            "unknown LLM provider: '{}'",
            other
        ))),
    }
}
