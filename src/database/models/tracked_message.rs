use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A transient bot message recorded for later deletion.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TrackedMessage {
    pub chat_id: i64,
    pub message_id: i64,
    pub sent_at: String,
}

impl TrackedMessage {
    pub async fn track(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        message_id: i64,
    ) -> Result<(), sqlx::Error> {
        let sent_at = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT OR REPLACE INTO tracked_messages (chat_id, message_id, sent_at)
             VALUES (?, ?, ?)",
        )
        .bind(chat_id)
        .bind(message_id)
        .bind(&sent_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Rows whose `sent_at` is strictly before the cutoff. Both sides are
    /// RFC 3339 UTC timestamps, so string comparison orders correctly.
    pub async fn find_older_than(
        pool: &sqlx::SqlitePool,
        cutoff: &str,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, TrackedMessage>(
            "SELECT * FROM tracked_messages WHERE sent_at < ? ORDER BY sent_at",
        )
        .bind(cutoff)
        .fetch_all(pool)
        .await
    }

    pub async fn remove(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        message_id: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM tracked_messages WHERE chat_id = ? AND message_id = ?")
            .bind(chat_id)
            .bind(message_id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
