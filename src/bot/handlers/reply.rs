use rust_i18n::t;
use teloxide::prelude::*;
use teloxide::types::Me;

use crate::bot::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::database::models::Chat;
use crate::utils::templates::{
    missing_placeholders, validate_template, PARTICIPANTS_PLACEHOLDER, WINNER_PLACEHOLDER,
};

/// Captures template input: a reply to one of the bot's pending setup
/// prompts becomes the raffle or winner message of the chat being edited.
pub async fn reply_capture_handler(
    bot: Bot,
    msg: Message,
    me: Me,
    db: DatabaseManager,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(reply) = msg.reply_to_message() else {
        return Ok(());
    };
    let from_bot = reply
        .from()
        .map(|user| user.id == me.user.id)
        .unwrap_or(false);
    if !from_bot {
        return Ok(());
    }

    let chat = Chat::get_or_create(&db.pool, msg.chat.id.0).await?;

    // Setup prompts are posted in this chat, but the pending ids live on
    // the record of the chat being configured.
    let mut candidates = Vec::new();
    if let Some(edited_id) = chat.edited_chat_id {
        if let Some(edited) = Chat::find_by_chat_id(&db.pool, edited_id).await? {
            candidates.push(edited);
        }
    }
    candidates.push(chat.clone());

    let reply_id = reply.id.0 as i64;
    for target in candidates {
        if target.raffle_setup_message_id == Some(reply_id) {
            return save_template(
                &bot,
                &msg,
                &db,
                &chat,
                target.telegram_chat_id,
                text,
                TemplateKind::Raffle,
            )
            .await;
        }
        if target.winner_setup_message_id == Some(reply_id) {
            return save_template(
                &bot,
                &msg,
                &db,
                &chat,
                target.telegram_chat_id,
                text,
                TemplateKind::Winner,
            )
            .await;
        }
    }

    Ok(())
}

enum TemplateKind {
    Raffle,
    Winner,
}

impl TemplateKind {
    fn required_placeholders(&self) -> &'static [&'static str] {
        match self {
            TemplateKind::Raffle => &[PARTICIPANTS_PLACEHOLDER],
            TemplateKind::Winner => &[PARTICIPANTS_PLACEHOLDER, WINNER_PLACEHOLDER],
        }
    }

    fn saved_key(&self) -> &'static str {
        match self {
            TemplateKind::Raffle => "custom_raffle_message.saved",
            TemplateKind::Winner => "custom_winner_message.saved",
        }
    }
}

async fn save_template(
    bot: &Bot,
    msg: &Message,
    db: &DatabaseManager,
    chat: &Chat,
    target_chat_id: i64,
    text: &str,
    kind: TemplateKind,
) -> HandlerResult {
    let required = kind.required_placeholders();

    if let Err(err) = validate_template(text, required) {
        let missing = missing_placeholders(text, required);
        let reply_text = if missing.is_empty() {
            t!(
                "template.invalid",
                locale = &chat.language,
                reason = err.to_string()
            )
        } else {
            t!(
                "template.missing_placeholders",
                locale = &chat.language,
                placeholders = missing.join(", ")
            )
        };
        bot.send_message(msg.chat.id, reply_text).await?;
        return Ok(());
    }

    match kind {
        TemplateKind::Raffle => {
            Chat::set_raffle_message(&db.pool, target_chat_id, Some(text)).await?;
        }
        TemplateKind::Winner => {
            Chat::set_winner_message(&db.pool, target_chat_id, Some(text)).await?;
        }
    }

    bot.send_message(msg.chat.id, t!(kind.saved_key(), locale = &chat.language))
        .await?;
    Ok(())
}
