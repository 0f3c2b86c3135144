//! Gemini HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::error::{ModelError, ModelResult};
use super::types::{
    ChatTurn, Content, GenerateContentRequest, GenerateContentResponse, PromptPart, Role,
    SystemInstruction,
};

/// Default Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model used for support conversations.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Capability to generate a chat reply given prior history and a new message.
///
/// The production implementation is [`GeminiClient`]; tests substitute a
/// scripted stand-in.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Run one chat turn. On success the returned transcript is the prior
    /// history followed by the new user turn and the model's reply turn.
    async fn generate(&self, history: &[Content], message: &str) -> ModelResult<ChatTurn>;
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    /// HTTP client.
    client: Client,
    /// API base URL.
    base_url: String,
    /// Model name, e.g. "gemini-1.5-flash-latest".
    model: String,
    /// API key sent with every request.
    api_key: String,
    /// Persona instructions attached to every request.
    system_prompt: String,
}

impl GeminiClient {
    /// Create a new client with the default endpoint and model.
    pub fn new(api_key: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            system_prompt: system_prompt.into(),
        }
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (pointed at local stand-ins in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    async fn generate(&self, history: &[Content], message: &str) -> ModelResult<ChatTurn> {
        let mut contents = history.to_vec();
        contents.push(Content::user(message));

        let request = GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![PromptPart {
                    text: &self.system_prompt,
                }],
            },
            contents: &contents,
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        debug!(model = %self.model, turns = contents.len(), "calling generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelError::ParseError(e.to_string()))?;

        let candidate = body
            .candidates
            .into_iter()
            .next()
            .ok_or(ModelError::NoCandidates)?;

        let reply: String = candidate
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();

        contents.push(Content {
            role: Role::Model,
            parts: candidate.content.parts,
        });

        Ok(ChatTurn {
            reply,
            history: contents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new("test-key", "You are a helpful assistant.");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_request_serialization() {
        let contents = vec![Content::user("Kumusta?")];
        let request = GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![PromptPart { text: "Be polite." }],
            },
            contents: &contents,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "Be polite.");
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "Kumusta?");
    }

    #[test]
    fn test_response_parsing() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Magandang araw!"}]
                },
                "finishReason": "STOP"
            }]
        });

        let parsed: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.candidates.len(), 1);
        assert_eq!(parsed.candidates[0].content.role, Role::Model);
        assert_eq!(parsed.candidates[0].content.parts[0].text, "Magandang araw!");
    }

    #[test]
    fn test_empty_candidates_parses() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
