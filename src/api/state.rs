//! Application state shared across handlers.

use std::sync::Arc;

use crate::gemini::ChatModel;
use crate::history::HistoryRepository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Per-user chat history store.
    pub history: HistoryRepository,
    /// External chat-generation capability.
    pub model: Arc<dyn ChatModel>,
    /// Allowed CORS origins. Empty means permissive defaults.
    pub allowed_origins: Vec<String>,
}

impl AppState {
    /// Create new application state.
    pub fn new(history: HistoryRepository, model: Arc<dyn ChatModel>) -> Self {
        Self {
            history,
            model,
            allowed_origins: Vec::new(),
        }
    }

    /// Restrict CORS to the given origins.
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = origins;
        self
    }
}
