use rust_i18n::t;
use teloxide::prelude::*;

use crate::bot::commands::require_edited_chat;
use crate::bot::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::database::models::{Chat, TrackedMessage};

/// Sends the raffle-template setup prompt and remembers its message id on
/// the edited chat's record; the reply to that prompt becomes the template.
pub async fn handle_custom_raffle_message(
    bot: &Bot,
    msg: &Message,
    db: &DatabaseManager,
    chat: &Chat,
) -> HandlerResult {
    let Some(edited) = require_edited_chat(bot, msg, db, chat).await? else {
        return Ok(());
    };

    let prompt = bot
        .send_message(
            msg.chat.id,
            t!("custom_raffle_message.prompt", locale = &chat.language),
        )
        .await?;
    TrackedMessage::track(&db.pool, msg.chat.id.0, prompt.id.0 as i64).await?;
    Chat::set_raffle_setup_message_id(
        &db.pool,
        edited.telegram_chat_id,
        Some(prompt.id.0 as i64),
    )
    .await?;

    if let Some(current) = &edited.raffle_message {
        let echo = bot
            .send_message(
                msg.chat.id,
                format!(
                    "{}\n\n{}",
                    t!("custom_raffle_message.current", locale = &chat.language),
                    current
                ),
            )
            .await?;
        TrackedMessage::track(&db.pool, msg.chat.id.0, echo.id.0 as i64).await?;
    }

    Ok(())
}

pub async fn handle_custom_winner_message(
    bot: &Bot,
    msg: &Message,
    db: &DatabaseManager,
    chat: &Chat,
) -> HandlerResult {
    let Some(edited) = require_edited_chat(bot, msg, db, chat).await? else {
        return Ok(());
    };

    let prompt = bot
        .send_message(
            msg.chat.id,
            t!("custom_winner_message.prompt", locale = &chat.language),
        )
        .await?;
    TrackedMessage::track(&db.pool, msg.chat.id.0, prompt.id.0 as i64).await?;
    Chat::set_winner_setup_message_id(
        &db.pool,
        edited.telegram_chat_id,
        Some(prompt.id.0 as i64),
    )
    .await?;

    if let Some(current) = &edited.winner_message {
        let echo = bot
            .send_message(
                msg.chat.id,
                format!(
                    "{}\n\n{}",
                    t!("custom_winner_message.current", locale = &chat.language),
                    current
                ),
            )
            .await?;
        TrackedMessage::track(&db.pool, msg.chat.id.0, echo.id.0 as i64).await?;
    }

    Ok(())
}

pub async fn handle_no_custom_raffle_message(
    bot: &Bot,
    msg: &Message,
    db: &DatabaseManager,
    chat: &Chat,
) -> HandlerResult {
    let Some(edited) = require_edited_chat(bot, msg, db, chat).await? else {
        return Ok(());
    };

    Chat::set_raffle_message(&db.pool, edited.telegram_chat_id, None).await?;
    bot.send_message(
        msg.chat.id,
        t!("custom_raffle_message.cleared", locale = &chat.language),
    )
    .await?;
    Ok(())
}

pub async fn handle_no_custom_winner_message(
    bot: &Bot,
    msg: &Message,
    db: &DatabaseManager,
    chat: &Chat,
) -> HandlerResult {
    let Some(edited) = require_edited_chat(bot, msg, db, chat).await? else {
        return Ok(());
    };

    Chat::set_winner_message(&db.pool, edited.telegram_chat_id, None).await?;
    bot.send_message(
        msg.chat.id,
        t!("custom_winner_message.cleared", locale = &chat.language),
    )
    .await?;
    Ok(())
}
