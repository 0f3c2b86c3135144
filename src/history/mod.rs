//! Conversation history types and the client/provider schema codec.
//!
//! The HTTP API speaks in `user`/`assistant` turns carrying a bare `content`
//! string; the Gemini API speaks in `user`/`model` entries carrying a `parts`
//! list. The codec below is a pure relabeling between the two shapes, with no
//! semantic transformation of the text.

mod repository;

pub use repository::HistoryRepository;

use serde::{Deserialize, Serialize};

use crate::gemini::{Content, Part, Role};

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// A single turn in the client-facing transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Speaker,
    pub content: String,
}

/// Chronological transcript, oldest turn first.
pub type ConversationHistory = Vec<ConversationTurn>;

impl From<Speaker> for Role {
    fn from(speaker: Speaker) -> Self {
        match speaker {
            Speaker::User => Role::User,
            Speaker::Assistant => Role::Model,
        }
    }
}

impl From<Role> for Speaker {
    fn from(role: Role) -> Self {
        match role {
            Role::User => Speaker::User,
            Role::Model => Speaker::Assistant,
        }
    }
}

/// Convert a client-format transcript into provider-format contents.
pub fn to_model_contents(history: &[ConversationTurn]) -> Vec<Content> {
    history
        .iter()
        .map(|turn| Content {
            role: turn.role.into(),
            parts: vec![Part {
                text: turn.content.clone(),
            }],
        })
        .collect()
}

/// Convert provider-format contents back into a client-format transcript.
///
/// Multi-part entries are folded into a single content string.
pub fn to_client_history(contents: &[Content]) -> ConversationHistory {
    contents
        .iter()
        .map(|entry| ConversationTurn {
            role: entry.role.into(),
            content: entry.parts.iter().map(|p| p.text.as_str()).collect(),
        })
        .collect()
}
