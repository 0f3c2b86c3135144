//! Wire types for the Gemini `generateContent` API.

use serde::{Deserialize, Serialize};

/// Speaker role in the provider schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One piece of text inside a content entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// A single conversation entry in provider format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    /// Build a single-part user entry.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Build a single-part model entry.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Outcome of one generation call: the reply text plus the full updated
/// transcript (prior history, the new user turn, the model's turn).
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub reply: String,
    pub history: Vec<Content>,
}

/// `generateContent` request body.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    #[serde(rename = "systemInstruction")]
    pub system_instruction: SystemInstruction<'a>,
    pub contents: &'a [Content],
}

/// System prompt wrapper in the request body.
#[derive(Debug, Serialize)]
pub struct SystemInstruction<'a> {
    pub parts: Vec<PromptPart<'a>>,
}

/// Borrowed text part used when building requests.
#[derive(Debug, Serialize)]
pub struct PromptPart<'a> {
    pub text: &'a str,
}

/// `generateContent` response body (only the fields this service reads).
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One candidate reply.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}
