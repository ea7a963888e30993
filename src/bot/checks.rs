use chrono::{Duration, Utc};
use teloxide::prelude::*;
use teloxide::types::{ChatId, ChatMemberKind, UserId};
use tracing::warn;

/// Updates older than this are dropped without processing.
const MAX_UPDATE_AGE_SECS: i64 = 300;

/// Drops messages that queued up while the bot was offline.
pub fn is_recent(msg: Message) -> bool {
    Utc::now().signed_duration_since(msg.date) <= Duration::seconds(MAX_UPDATE_AGE_SECS)
}

/// The admin gate applied to every command. Private chats pass trivially;
/// in groups and channels the sender has to be an administrator. Anonymous
/// admins and channel posts arrive with the chat itself as the sender.
pub async fn is_sender_admin(bot: &Bot, msg: &Message) -> bool {
    if msg.chat.is_private() {
        return true;
    }

    if msg
        .sender_chat()
        .map(|sender| sender.id == msg.chat.id)
        .unwrap_or(false)
    {
        return true;
    }

    match msg.from() {
        Some(user) => is_chat_admin(bot, msg.chat.id, user.id).await,
        None => false,
    }
}

pub async fn is_chat_admin(bot: &Bot, chat_id: ChatId, user_id: UserId) -> bool {
    match bot.get_chat_administrators(chat_id).await {
        Ok(admins) => admins.iter().any(|member| member.user.id == user_id),
        Err(e) => {
            warn!("Failed to fetch administrators of chat {}: {}", chat_id, e);
            false
        }
    }
}

/// Whether the user is currently a member/subscriber of the chat.
pub async fn is_chat_member(bot: &Bot, chat_id: ChatId, user_id: UserId) -> bool {
    match bot.get_chat_member(chat_id, user_id).await {
        Ok(member) => match member.kind {
            ChatMemberKind::Restricted(restricted) => restricted.is_member,
            ChatMemberKind::Left | ChatMemberKind::Banned(_) => false,
            _ => true,
        },
        Err(_) => false,
    }
}
