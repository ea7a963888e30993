use rust_i18n::t;
use teloxide::prelude::*;

use crate::bot::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::database::models::Chat;

pub async fn handle_debug(bot: &Bot, msg: &Message, db: &DatabaseManager) -> HandlerResult {
    match Chat::find_by_chat_id(&db.pool, msg.chat.id.0).await? {
        Some(chat) => {
            let dump = serde_json::to_string_pretty(&chat)?;
            bot.send_message(msg.chat.id, dump).await?;
        }
        None => {
            bot.send_message(msg.chat.id, t!("debug.not_found")).await?;
        }
    }
    Ok(())
}

pub async fn handle_delete(bot: &Bot, msg: &Message, db: &DatabaseManager) -> HandlerResult {
    let language = Chat::find_by_chat_id(&db.pool, msg.chat.id.0)
        .await?
        .map(|chat| chat.language)
        .unwrap_or_else(|| "en".to_string());

    let key = if Chat::delete(&db.pool, msg.chat.id.0).await? {
        "delete.done"
    } else {
        "delete.not_found"
    };
    bot.send_message(msg.chat.id, t!(key, locale = &language))
        .await?;
    Ok(())
}
