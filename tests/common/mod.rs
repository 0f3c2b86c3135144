//! Test utilities and common setup.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;

use fntc_bot::api::{self, AppState};
use fntc_bot::db::Database;
use fntc_bot::gemini::{ChatModel, ChatTurn, Content, ModelError, ModelResult};
use fntc_bot::history::HistoryRepository;

/// Scripted stand-in for the Gemini client.
///
/// Echoes a fixed reply and appends the user/model turns the way the real
/// client does, or fails every call when built with `failing()`.
pub struct ScriptedModel {
    reply: String,
    fail: bool,
    calls: AtomicUsize,
}

impl ScriptedModel {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn generate(&self, history: &[Content], message: &str) -> ModelResult<ChatTurn> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(ModelError::NoCandidates);
        }

        let mut updated = history.to_vec();
        updated.push(Content::user(message));
        updated.push(Content::model(self.reply.as_str()));

        Ok(ChatTurn {
            reply: self.reply.clone(),
            history: updated,
        })
    }
}

/// Create a test application backed by an in-memory database and the given
/// model, returning the router plus the repository for direct inspection.
pub async fn test_app_with(model: Arc<dyn ChatModel>) -> (Router, HistoryRepository) {
    let db = Database::in_memory().await.unwrap();
    let history = HistoryRepository::new(db.pool().clone());
    let state = AppState::new(history.clone(), model);
    (api::create_router(state), history)
}

/// Create a test application with a model that echoes a canned reply.
pub async fn test_app() -> Router {
    let (app, _history) = test_app_with(Arc::new(ScriptedModel::replying("Test reply."))).await;
    app
}
