use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Per-chat raffle configuration. One row per Telegram chat id.
///
/// Group and channel rows hold the raffle settings themselves; private
/// chat rows additionally carry `edited_chat_id`, the configurable chat
/// the user is currently editing from that private conversation.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub telegram_chat_id: i64,
    pub title: Option<String>,
    pub language: String,
    pub raffle_message: Option<String>,
    pub winner_message: Option<String>,
    pub raffle_setup_message_id: Option<i64>,
    pub winner_setup_message_id: Option<i64>,
    pub number_of_winners: i64,
    pub check_subscription: bool,
    pub keep_raffle_message: bool,
    pub configurable: bool,
    pub edited_chat_id: Option<i64>,
    pub created_at: String,
}

impl Chat {
    pub async fn find_by_chat_id(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Chat>("SELECT * FROM chats WHERE telegram_chat_id = ?")
            .bind(chat_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
    ) -> Result<Self, sqlx::Error> {
        let created_at = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO chats (telegram_chat_id, language, number_of_winners, created_at)
             VALUES (?, 'en', 1, ?)",
        )
        .bind(chat_id)
        .bind(&created_at)
        .execute(pool)
        .await?;

        // Fetch the created chat
        Self::find_by_chat_id(pool, chat_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn get_or_create(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
    ) -> Result<Self, sqlx::Error> {
        match Self::find_by_chat_id(pool, chat_id).await? {
            Some(chat) => Ok(chat),
            None => Self::create(pool, chat_id).await,
        }
    }

    pub async fn list_configurable(
        pool: &sqlx::SqlitePool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Chat>(
            "SELECT * FROM chats WHERE configurable = 1 ORDER BY created_at",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn set_language(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        language: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE chats SET language = ? WHERE telegram_chat_id = ?")
            .bind(language)
            .bind(chat_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn set_number_of_winners(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        number_of_winners: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE chats SET number_of_winners = ? WHERE telegram_chat_id = ?")
            .bind(number_of_winners)
            .bind(chat_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn set_check_subscription(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        check_subscription: bool,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE chats SET check_subscription = ? WHERE telegram_chat_id = ?")
            .bind(check_subscription)
            .bind(chat_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn set_keep_raffle_message(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        keep_raffle_message: bool,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE chats SET keep_raffle_message = ? WHERE telegram_chat_id = ?")
            .bind(keep_raffle_message)
            .bind(chat_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn set_configurable(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        configurable: bool,
        title: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE chats SET configurable = ?, title = ? WHERE telegram_chat_id = ?")
            .bind(configurable)
            .bind(title)
            .bind(chat_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn set_edited_chat_id(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        edited_chat_id: Option<i64>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE chats SET edited_chat_id = ? WHERE telegram_chat_id = ?")
            .bind(edited_chat_id)
            .bind(chat_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Clears `edited_chat_id` on every private chat that was editing the
    /// given chat. Called when the bot loses its admin rights there.
    pub async fn clear_edited_chat_references(
        pool: &sqlx::SqlitePool,
        edited_chat_id: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE chats SET edited_chat_id = NULL WHERE edited_chat_id = ?")
            .bind(edited_chat_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn set_raffle_message(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        raffle_message: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE chats SET raffle_message = ?, raffle_setup_message_id = NULL
             WHERE telegram_chat_id = ?",
        )
        .bind(raffle_message)
        .bind(chat_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn set_winner_message(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        winner_message: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE chats SET winner_message = ?, winner_setup_message_id = NULL
             WHERE telegram_chat_id = ?",
        )
        .bind(winner_message)
        .bind(chat_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn set_raffle_setup_message_id(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        message_id: Option<i64>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE chats SET raffle_setup_message_id = ? WHERE telegram_chat_id = ?")
            .bind(message_id)
            .bind(chat_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn set_winner_setup_message_id(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        message_id: Option<i64>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE chats SET winner_setup_message_id = ? WHERE telegram_chat_id = ?")
            .bind(message_id)
            .bind(chat_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn delete(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chats WHERE telegram_chat_id = ?")
            .bind(chat_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
