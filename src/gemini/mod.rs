//! Gemini model client module.
//!
//! Provides the async client for the external chat-generation capability.

mod client;
mod error;
mod types;

pub use client::{ChatModel, GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::{ModelError, ModelResult};
pub use types::*;
