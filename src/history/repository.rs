//! Chat history repository for database operations.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use super::{ConversationHistory, ConversationTurn};

/// Repository for per-user chat history records.
#[derive(Debug, Clone)]
pub struct HistoryRepository {
    pool: SqlitePool,
}

impl HistoryRepository {
    /// Create a new history repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch the stored transcript for a user.
    ///
    /// Unknown users get an empty transcript.
    #[instrument(skip(self))]
    pub async fn get(&self, user_id: &str) -> Result<ConversationHistory> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT history_json FROM chat_histories WHERE user_id = ?")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .context("Failed to fetch chat history")?;

        match row {
            Some((json,)) => {
                serde_json::from_str(&json).context("Failed to decode stored chat history")
            }
            None => Ok(Vec::new()),
        }
    }

    /// Store the full transcript for a user, replacing any previous record.
    #[instrument(skip(self, history), fields(turns = history.len()))]
    pub async fn put(&self, user_id: &str, history: &[ConversationTurn]) -> Result<()> {
        let json = serde_json::to_string(history).context("Failed to encode chat history")?;

        debug!("Storing chat history for {}", user_id);

        sqlx::query(
            r#"
            INSERT INTO chat_histories (user_id, history_json)
            VALUES (?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                history_json = excluded.history_json,
                updated_at = datetime('now')
            "#,
        )
        .bind(user_id)
        .bind(&json)
        .execute(&self.pool)
        .await
        .context("Failed to upsert chat history")?;

        Ok(())
    }

    /// Count stored history records.
    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM chat_histories")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count chat histories")?;

        Ok(count.0)
    }
}
