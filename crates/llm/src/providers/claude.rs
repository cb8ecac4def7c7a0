use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::json;
use tracing::debug;

use crate::provider::{LlmError, LlmProvider};

pub struct ClaudeProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl ClaudeProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    /// Build the request body for the Anthropic messages API.
    /// The document goes in as a base64 `document` content block ahead of
    /// the text instruction.
    fn build_request_body(
        &self,
        document: &[u8],
        media_type: &str,
        instruction: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> serde_json::Value {
        json!({
            "model": self.model,
            "max_tokens": max_tokens,
            "temperature": temperature,
            "messages": [{
                "role": "user",
                "content": [
                    {
                        "type": "document",
                        "source": {
                            "type": "base64",
                            "media_type": media_type,
                            "data": STANDARD.encode(document),
                        }
                    },
                    { "type": "text", "text": instruction },
                ],
            }],
        })
    }
}

#[async_trait]
impl LlmProvider for ClaudeProvider {
    async fn generate_from_document(
        &self,
        document: &[u8],
        media_type: &str,
        instruction: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        let url = "https://api.anthropic.com/v1/messages";

        let body =
            self.build_request_body(document, media_type, instruction, temperature, max_tokens);

        debug!("Claude request to {} ({} byte document)", url, document.len());

        let response = self
            .client
            .post(url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError { status, body });
        }

        let resp: serde_json::Value = response.json().await?;
        let content = resp["content"][0]["text"]
            .as_str()
            .ok_or_else(|| LlmError::ParseError("missing content[0].text".into()))?
            .to_string();

        Ok(content)
    }
}
