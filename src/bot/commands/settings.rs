use rust_i18n::t;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::bot::commands::require_edited_chat;
use crate::bot::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::database::models::{Chat, TrackedMessage};

pub fn language_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("English 🇬🇧", "lang:en"),
        InlineKeyboardButton::callback("Русский 🇷🇺", "lang:ru"),
    ]])
}

pub fn winners_keyboard() -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = (1..=10)
        .collect::<Vec<i64>>()
        .chunks(5)
        .map(|chunk| {
            chunk
                .iter()
                .map(|n| InlineKeyboardButton::callback(n.to_string(), format!("winners:{n}")))
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

pub async fn handle_language(
    bot: &Bot,
    msg: &Message,
    db: &DatabaseManager,
    chat: &Chat,
) -> HandlerResult {
    let sent = bot
        .send_message(msg.chat.id, t!("language.select", locale = &chat.language))
        .reply_markup(language_keyboard())
        .await?;
    TrackedMessage::track(&db.pool, msg.chat.id.0, sent.id.0 as i64).await?;
    Ok(())
}

pub async fn handle_number_of_winners(
    bot: &Bot,
    msg: &Message,
    db: &DatabaseManager,
    chat: &Chat,
) -> HandlerResult {
    if require_edited_chat(bot, msg, db, chat).await?.is_none() {
        return Ok(());
    }

    let sent = bot
        .send_message(
            msg.chat.id,
            t!("number_of_winners.prompt", locale = &chat.language),
        )
        .reply_markup(winners_keyboard())
        .await?;
    TrackedMessage::track(&db.pool, msg.chat.id.0, sent.id.0 as i64).await?;
    Ok(())
}

pub async fn handle_check_subscription(
    bot: &Bot,
    msg: &Message,
    db: &DatabaseManager,
    chat: &Chat,
) -> HandlerResult {
    let Some(edited) = require_edited_chat(bot, msg, db, chat).await? else {
        return Ok(());
    };

    let enabled = !edited.check_subscription;
    Chat::set_check_subscription(&db.pool, edited.telegram_chat_id, enabled).await?;

    let key = if enabled {
        "check_subscription.on"
    } else {
        "check_subscription.off"
    };
    bot.send_message(msg.chat.id, t!(key, locale = &chat.language))
        .await?;
    Ok(())
}

/// Toggles keeping the raffle post after winners are drawn. Unlike the
/// other settings this one applies to the chat it is issued in.
pub async fn handle_keep_raffle_message(
    bot: &Bot,
    msg: &Message,
    db: &DatabaseManager,
    chat: &Chat,
) -> HandlerResult {
    let enabled = !chat.keep_raffle_message;
    Chat::set_keep_raffle_message(&db.pool, chat.telegram_chat_id, enabled).await?;

    let key = if enabled {
        "keep_raffle_message.on"
    } else {
        "keep_raffle_message.off"
    };
    bot.send_message(msg.chat.id, t!(key, locale = &chat.language))
        .await?;
    Ok(())
}
