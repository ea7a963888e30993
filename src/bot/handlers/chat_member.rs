use teloxide::types::ChatMemberUpdated;
use tracing::info;

use crate::bot::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::database::models::Chat;

/// Maintains the configurable-chats set from `my_chat_member` updates:
/// being made an admin adds the chat; getting kicked, banned or demoted to
/// a regular member removes it and detaches anyone who was editing it.
pub async fn chat_member_handler(upd: ChatMemberUpdated, db: DatabaseManager) -> HandlerResult {
    let chat_id = upd.chat.id.0;
    let new = &upd.new_chat_member.kind;
    let was_admin = upd.old_chat_member.kind.is_administrator();

    if new.is_administrator() {
        Chat::get_or_create(&db.pool, chat_id).await?;
        Chat::set_configurable(&db.pool, chat_id, true, upd.chat.title()).await?;
        info!(
            "Chat {} ({}) is now configurable",
            chat_id,
            upd.chat.title().unwrap_or("untitled")
        );
    } else if new.is_left() || new.is_banned() || was_admin {
        if Chat::find_by_chat_id(&db.pool, chat_id).await?.is_some() {
            Chat::set_configurable(&db.pool, chat_id, false, upd.chat.title()).await?;
        }
        Chat::clear_edited_chat_references(&db.pool, chat_id).await?;
        info!("Chat {} is no longer configurable", chat_id);
    }

    Ok(())
}
