use rust_i18n::t;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup};

use crate::bot::{checks, HandlerResult};
use crate::database::connection::DatabaseManager;
use crate::database::models::{Chat, TrackedMessage};

pub async fn handle_id(bot: &Bot, msg: &Message, chat: &Chat) -> HandlerResult {
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    bot.send_message(
        msg.chat.id,
        t!(
            "id",
            locale = &chat.language,
            chat_id = msg.chat.id.0,
            user_id = user_id
        ),
    )
    .await?;
    Ok(())
}

pub async fn handle_add_chat(bot: &Bot, msg: &Message, chat: &Chat) -> HandlerResult {
    bot.send_message(msg.chat.id, t!("add_chat", locale = &chat.language))
        .await?;
    Ok(())
}

/// Shows the menu of configurable chats the requesting user administers.
/// Only meaningful in a private conversation; the selection callback
/// stores `edited_chat_id`.
pub async fn handle_choose_channel(
    bot: &Bot,
    msg: &Message,
    db: &DatabaseManager,
    chat: &Chat,
) -> HandlerResult {
    if !msg.chat.is_private() {
        bot.send_message(msg.chat.id, t!("private_only", locale = &chat.language))
            .await?;
        return Ok(());
    }

    let Some(user) = msg.from() else {
        return Ok(());
    };

    let mut rows: Vec<Vec<InlineKeyboardButton>> = Vec::new();
    for candidate in Chat::list_configurable(&db.pool).await? {
        // only list chats the requesting user is an admin of
        if !checks::is_chat_admin(bot, ChatId(candidate.telegram_chat_id), user.id).await {
            continue;
        }
        rows.push(vec![InlineKeyboardButton::callback(
            chat_label(&candidate),
            format!("chat:{}", candidate.telegram_chat_id),
        )]);
    }

    if rows.is_empty() {
        bot.send_message(msg.chat.id, t!("choose_channel.empty", locale = &chat.language))
            .await?;
        return Ok(());
    }

    let sent = bot
        .send_message(msg.chat.id, t!("choose_channel.prompt", locale = &chat.language))
        .reply_markup(InlineKeyboardMarkup::new(rows))
        .await?;
    TrackedMessage::track(&db.pool, msg.chat.id.0, sent.id.0 as i64).await?;

    Ok(())
}

pub fn chat_label(chat: &Chat) -> String {
    chat.title
        .clone()
        .unwrap_or_else(|| chat.telegram_chat_id.to_string())
}
