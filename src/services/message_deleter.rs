use chrono::{Duration, Utc};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{ChatId, MessageId};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::database::connection::DatabaseManager;
use crate::database::models::TrackedMessage;
use crate::utils::logging::log_database_error;

/// Tracked bot messages older than this are deleted.
const RETENTION_HOURS: i64 = 24;

pub struct MessageDeleterService {
    bot: Bot,
    db: Arc<DatabaseManager>,
    scheduler: JobScheduler,
}

impl MessageDeleterService {
    pub async fn new(
        bot: Bot,
        db: Arc<DatabaseManager>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self { bot, db, scheduler })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // Prune stale messages once an hour
        let bot = self.bot.clone();
        let db = self.db.clone();

        let deleter_job = Job::new_async("0 0 * * * *", move |_uuid, _l| {
            let bot = bot.clone();
            let db = db.clone();
            Box::pin(async move {
                if let Err(e) = delete_stale_messages(bot, db).await {
                    tracing::error!("Failed to delete stale messages: {}", e);
                }
            })
        })?;

        self.scheduler.add(deleter_job).await?;
        self.scheduler.start().await?;

        tracing::info!(
            "Message deleter started - pruning messages older than {}h every hour",
            RETENTION_HOURS
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    // Manual trigger for testing
    pub async fn delete_stale_now(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        delete_stale_messages(self.bot.clone(), self.db.clone()).await
    }
}

async fn delete_stale_messages(
    bot: Bot,
    db: Arc<DatabaseManager>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cutoff = (Utc::now() - Duration::hours(RETENTION_HOURS)).to_rfc3339();
    let stale = TrackedMessage::find_older_than(&db.pool, &cutoff).await?;

    if stale.is_empty() {
        return Ok(());
    }

    tracing::info!("Deleting {} stale bot message(s)", stale.len());

    for message in stale {
        // Best effort: the message may already be gone or the bot kicked.
        // The row is pruned either way so it is not retried forever.
        if let Err(e) = bot
            .delete_message(ChatId(message.chat_id), MessageId(message.message_id as i32))
            .await
        {
            tracing::warn!(
                "Failed to delete message {} in chat {}: {}",
                message.message_id,
                message.chat_id,
                e
            );
        }
        if let Err(e) = TrackedMessage::remove(&db.pool, message.chat_id, message.message_id).await
        {
            log_database_error("delete", "tracked_messages", &e.to_string());
        }
    }

    Ok(())
}
