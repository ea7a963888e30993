use rust_i18n::t;
use teloxide::prelude::*;

use crate::bot::commands::{chats, raffle, settings, superadmin, templates, Command, SuperAdminCommand};
use crate::bot::{checks, HandlerResult};
use crate::config::Config;
use crate::database::connection::DatabaseManager;
use crate::database::models::Chat;
use crate::utils::logging::{log_command_error, log_command_start};

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    db: DatabaseManager,
) -> HandlerResult {
    let chat = Chat::get_or_create(&db.pool, msg.chat.id.0).await?;

    let command_name = format!("{cmd:?}");
    let username = msg
        .from()
        .and_then(|u| u.username.as_deref())
        .unwrap_or("unknown")
        .to_string();
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    log_command_start(&command_name, &username, user_id, msg.chat.id.0);

    if !checks::is_sender_admin(&bot, &msg).await {
        bot.send_message(msg.chat.id, t!("only_admins", locale = &chat.language))
            .await?;
        return Ok(());
    }

    let outcome = dispatch_command(&bot, &msg, cmd, &db, &chat).await;
    if let Err(err) = &outcome {
        log_command_error(&command_name, &username, user_id, msg.chat.id.0, &err.to_string());
    }
    outcome
}

async fn dispatch_command(
    bot: &Bot,
    msg: &Message,
    cmd: Command,
    db: &DatabaseManager,
    chat: &Chat,
) -> HandlerResult {
    match cmd {
        Command::Help | Command::Start => {
            bot.send_message(msg.chat.id, t!("help", locale = &chat.language))
                .await?;
            Ok(())
        }
        Command::Language => settings::handle_language(bot, msg, db, chat).await,
        Command::Id => chats::handle_id(bot, msg, chat).await,
        Command::AddChat => chats::handle_add_chat(bot, msg, chat).await,
        Command::Randy => raffle::handle_randy(bot, msg, db, chat).await,
        Command::KeepRaffleMessage => {
            settings::handle_keep_raffle_message(bot, msg, db, chat).await
        }
        Command::ChooseChannelToConfigure => {
            chats::handle_choose_channel(bot, msg, db, chat).await
        }
        Command::NumberOfWinners => settings::handle_number_of_winners(bot, msg, db, chat).await,
        Command::CheckSubscription => {
            settings::handle_check_subscription(bot, msg, db, chat).await
        }
        Command::CustomRaffleMessage => {
            templates::handle_custom_raffle_message(bot, msg, db, chat).await
        }
        Command::CustomWinnerMessage => {
            templates::handle_custom_winner_message(bot, msg, db, chat).await
        }
        Command::NoCustomRaffleMessage => {
            templates::handle_no_custom_raffle_message(bot, msg, db, chat).await
        }
        Command::NoCustomWinnerMessage => {
            templates::handle_no_custom_winner_message(bot, msg, db, chat).await
        }
    }
}

/// Commands reserved for the configured superadmin. Anyone else is ignored
/// without a reply.
pub async fn superadmin_command_handler(
    bot: Bot,
    msg: Message,
    cmd: SuperAdminCommand,
    db: DatabaseManager,
    config: Config,
) -> HandlerResult {
    let from_id = msg.from().map(|u| u.id.0 as i64);
    if from_id != Some(config.super_admin_id) {
        return Ok(());
    }

    match cmd {
        SuperAdminCommand::Debug => superadmin::handle_debug(&bot, &msg, &db).await,
        SuperAdminCommand::Delete => superadmin::handle_delete(&bot, &msg, &db).await,
    }
}
