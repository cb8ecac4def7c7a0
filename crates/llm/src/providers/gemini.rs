use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::json;
use tracing::debug;

use crate::provider::{LlmError, LlmProvider};

pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    /// Build the request body for the Gemini generateContent API.
    /// The document rides along as a base64 `inline_data` part.
    fn build_request_body(
        document: &[u8],
        media_type: &str,
        instruction: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> serde_json::Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [
                    { "text": instruction },
                    {
                        "inline_data": {
                            "mime_type": media_type,
                            "data": STANDARD.encode(document),
                        }
                    },
                ],
            }],
            "generationConfig": {
                "temperature": temperature,
                "maxOutputTokens": max_tokens,
            },
        })
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn generate_from_document(
        &self,
        document: &[u8],
        media_type: &str,
        instruction: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key,
        );

        let body =
            Self::build_request_body(document, media_type, instruction, temperature, max_tokens);

        debug!(
            "Gemini request to model={} ({} byte document)",
            self.model,
            document.len()
        );

        let response = self
            .client
            .post(&url)
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
        let content = resp["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                LlmError::ParseError("missing candidates[0].content.parts[0].text".into())
            })?
            .to_string();

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn test_request_body_structure() {
        let document = b"%PDF-1.4 fake";
        let body = GeminiProvider::build_request_body(
            document,
            "application/pdf",
            "Create 5 flashcards from this PDF.",
            0.1,
            4096,
        );

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0]["role"], "user");

        let parts = contents[0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts[0]["text"].as_str().unwrap(),
            "Create 5 flashcards from this PDF."
        );

        // Document part is base64 with the declared media type
        assert_eq!(parts[1]["inline_data"]["mime_type"], "application/pdf");
        let data = parts[1]["inline_data"]["data"].as_str().unwrap();
        assert_eq!(STANDARD.decode(data).unwrap(), document);

        let temp = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temp - 0.1).abs() < 1e-6, "temperature should be ~0.1, got {temp}");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 4096);
    }
}
