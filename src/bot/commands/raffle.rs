use rust_i18n::t;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use uuid::Uuid;

use crate::bot::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::database::models::{Chat, Raffle};
use crate::utils::templates::render_raffle_message;

/// Starts a raffle: posts the chat's raffle message with join and finish
/// buttons and records the run. Winners are drawn from the finish button.
pub async fn handle_randy(
    bot: &Bot,
    msg: &Message,
    db: &DatabaseManager,
    chat: &Chat,
) -> HandlerResult {
    if msg.chat.is_private() {
        bot.send_message(msg.chat.id, t!("public_only", locale = &chat.language))
            .await?;
        return Ok(());
    }

    let template = chat
        .raffle_message
        .clone()
        .unwrap_or_else(|| t!("raffle.default", locale = &chat.language));
    let text = render_raffle_message(&template, 0);

    let raffle_id = Uuid::new_v4().to_string();
    let sent = bot
        .send_message(msg.chat.id, text)
        .reply_markup(raffle_keyboard(&raffle_id, &chat.language))
        .await?;

    Raffle::create(&db.pool, &raffle_id, msg.chat.id.0, sent.id.0 as i64).await?;
    tracing::info!("Started raffle {} in chat {}", raffle_id, msg.chat.id);

    Ok(())
}

pub fn raffle_keyboard(raffle_id: &str, language: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            t!("raffle.join_button", locale = language),
            format!("raffle:join:{raffle_id}"),
        )],
        vec![InlineKeyboardButton::callback(
            t!("raffle.finish_button", locale = language),
            format!("raffle:finish:{raffle_id}"),
        )],
    ])
}
