pub mod chats;
pub mod raffle;
pub mod settings;
pub mod superadmin;
pub mod templates;

use rust_i18n::t;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::database::connection::DatabaseManager;
use crate::database::models::Chat;

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Raffle bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Display this help message")]
    Start,
    #[command(description = "Choose the bot language for this chat")]
    Language,
    #[command(description = "Show this chat's id")]
    Id,
    #[command(description = "How to add the bot to a channel")]
    AddChat,
    #[command(description = "Start a raffle in this chat")]
    Randy,
    #[command(description = "Keep or delete the raffle post after winners are drawn")]
    KeepRaffleMessage,
    #[command(description = "Pick which chat to configure")]
    ChooseChannelToConfigure,
    #[command(description = "Set how many winners a raffle has")]
    NumberOfWinners,
    #[command(description = "Require participants to be subscribed")]
    CheckSubscription,
    #[command(description = "Set a custom raffle message")]
    CustomRaffleMessage,
    #[command(description = "Set a custom winner message")]
    CustomWinnerMessage,
    #[command(description = "Remove the custom raffle message")]
    NoCustomRaffleMessage,
    #[command(description = "Remove the custom winner message")]
    NoCustomWinnerMessage,
}

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Superadmin commands:")]
pub enum SuperAdminCommand {
    #[command(description = "Dump the chat configuration record")]
    Debug,
    #[command(description = "Delete the chat configuration record")]
    Delete,
}

/// Resolves the chat a private-chat configuration command applies to.
/// Replies with a hint and returns `None` when no chat was chosen yet.
pub(crate) async fn require_edited_chat(
    bot: &Bot,
    msg: &Message,
    db: &DatabaseManager,
    chat: &Chat,
) -> Result<Option<Chat>, Box<dyn std::error::Error + Send + Sync>> {
    let Some(edited_id) = chat.edited_chat_id else {
        bot.send_message(msg.chat.id, t!("need_edited_chat", locale = &chat.language))
            .await?;
        return Ok(None);
    };

    let edited = Chat::get_or_create(&db.pool, edited_id).await?;
    Ok(Some(edited))
}
