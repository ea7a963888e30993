use rust_i18n::t;
use teloxide::prelude::*;
use teloxide::types::{ChatId, MessageId};
use tracing::warn;

use crate::bot::commands::{chats::chat_label, raffle::raffle_keyboard};
use crate::bot::{checks, HandlerResult};
use crate::database::connection::DatabaseManager;
use crate::database::models::{pick_winners, Chat, Raffle, RaffleParticipant};
use crate::utils::templates::{render_raffle_message, render_winner_message};
use crate::utils::validation::{validate_number_of_winners, validate_telegram_chat_id};

/// Routes inline-keyboard callbacks. Data is `prefix:payload`:
/// `lang:` and `winners:` come from the settings menus, `chat:` from the
/// channel-selection menu, and `raffle:join:`/`raffle:finish:` from posts.
pub async fn callback_handler(bot: Bot, q: CallbackQuery, db: DatabaseManager) -> HandlerResult {
    let Some(data) = q.data.clone() else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    tracing::info!(
        "Callback received: '{}' from user {}",
        data,
        q.from.id
    );

    if let Some(code) = data.strip_prefix("lang:") {
        return language_callback(bot, q, code.to_string(), &db).await;
    }
    if let Some(count) = data.strip_prefix("winners:") {
        return winners_callback(bot, q, count.to_string(), &db).await;
    }
    if let Some(target) = data.strip_prefix("chat:") {
        return chat_selection_callback(bot, q, target.to_string(), &db).await;
    }
    if let Some(raffle_id) = data.strip_prefix("raffle:join:") {
        return raffle_join_callback(bot, q, raffle_id.to_string(), &db).await;
    }
    if let Some(raffle_id) = data.strip_prefix("raffle:finish:") {
        return raffle_finish_callback(bot, q, raffle_id.to_string(), &db).await;
    }

    bot.answer_callback_query(q.id).await?;
    Ok(())
}

async fn language_callback(
    bot: Bot,
    q: CallbackQuery,
    code: String,
    db: &DatabaseManager,
) -> HandlerResult {
    let Some(message) = q.message.clone() else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    if !crate::_rust_i18n_available_locales().contains(&code.as_str()) {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    }

    Chat::get_or_create(&db.pool, message.chat.id.0).await?;
    Chat::set_language(&db.pool, message.chat.id.0, &code).await?;

    bot.edit_message_text(message.chat.id, message.id, t!("language.set", locale = &code))
        .await?;
    bot.answer_callback_query(q.id).await?;
    Ok(())
}

async fn winners_callback(
    bot: Bot,
    q: CallbackQuery,
    count: String,
    db: &DatabaseManager,
) -> HandlerResult {
    let Some(message) = q.message.clone() else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    let private = Chat::get_or_create(&db.pool, message.chat.id.0).await?;
    let Some(edited_id) = private.edited_chat_id else {
        bot.answer_callback_query(q.id)
            .text(t!("need_edited_chat", locale = &private.language))
            .await?;
        return Ok(());
    };

    let count: i64 = count.parse().unwrap_or(0);
    if validate_number_of_winners(count).is_err() {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    }

    Chat::set_number_of_winners(&db.pool, edited_id, count).await?;
    bot.edit_message_text(
        message.chat.id,
        message.id,
        t!(
            "number_of_winners.set",
            locale = &private.language,
            count = count
        ),
    )
    .await?;
    bot.answer_callback_query(q.id).await?;
    Ok(())
}

async fn chat_selection_callback(
    bot: Bot,
    q: CallbackQuery,
    target: String,
    db: &DatabaseManager,
) -> HandlerResult {
    let Some(message) = q.message.clone() else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    let private = Chat::get_or_create(&db.pool, message.chat.id.0).await?;
    let Ok(target_id) = target.parse::<i64>() else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };
    if validate_telegram_chat_id(target_id).is_err() {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    }

    // The bot has to still be an admin there, and only that chat's own
    // admins may configure it.
    match bot.get_chat_administrators(ChatId(target_id)).await {
        Ok(admins) => {
            if !admins.iter().any(|member| member.user.id == q.from.id) {
                bot.answer_callback_query(q.id)
                    .text(t!("choose_channel.not_admin", locale = &private.language))
                    .await?;
                return Ok(());
            }
        }
        Err(err) => {
            warn!("Lost access to configurable chat {}: {}", target_id, err);
            Chat::set_configurable(&db.pool, target_id, false, None).await?;
            bot.answer_callback_query(q.id)
                .text(t!("choose_channel.gone", locale = &private.language))
                .await?;
            return Ok(());
        }
    }

    let edited = Chat::get_or_create(&db.pool, target_id).await?;
    Chat::set_edited_chat_id(&db.pool, private.telegram_chat_id, Some(target_id)).await?;

    bot.edit_message_text(
        message.chat.id,
        message.id,
        t!(
            "choose_channel.set",
            locale = &private.language,
            title = chat_label(&edited)
        ),
    )
    .await?;
    bot.answer_callback_query(q.id).await?;
    Ok(())
}

async fn raffle_join_callback(
    bot: Bot,
    q: CallbackQuery,
    raffle_id: String,
    db: &DatabaseManager,
) -> HandlerResult {
    let Some(raffle) = Raffle::find_by_id(&db.pool, &raffle_id).await? else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    let chat = Chat::get_or_create(&db.pool, raffle.telegram_chat_id).await?;
    let language = chat.language.clone();

    if raffle.is_finished() {
        bot.answer_callback_query(q.id)
            .text(t!("raffle.already_finished", locale = &language))
            .await?;
        return Ok(());
    }

    if chat.check_subscription
        && !checks::is_chat_member(&bot, ChatId(raffle.telegram_chat_id), q.from.id).await
    {
        bot.answer_callback_query(q.id)
            .text(t!("raffle.need_subscription", locale = &language))
            .await?;
        return Ok(());
    }

    let display_name = q
        .from
        .username
        .as_ref()
        .map(|username| format!("@{username}"))
        .unwrap_or_else(|| q.from.first_name.clone());
    let added = RaffleParticipant::add(
        &db.pool,
        &raffle.id,
        q.from.id.0 as i64,
        Some(&display_name),
    )
    .await?;

    if !added {
        bot.answer_callback_query(q.id)
            .text(t!("raffle.already_joined", locale = &language))
            .await?;
        return Ok(());
    }

    let count = RaffleParticipant::count(&db.pool, &raffle.id).await?;
    let template = chat
        .raffle_message
        .clone()
        .unwrap_or_else(|| t!("raffle.default", locale = &language));
    let text = render_raffle_message(&template, count);
    if let Err(err) = bot
        .edit_message_text(
            ChatId(raffle.telegram_chat_id),
            MessageId(raffle.message_id as i32),
            text,
        )
        .reply_markup(raffle_keyboard(&raffle.id, &language))
        .await
    {
        warn!("Failed to update raffle message {}: {}", raffle.id, err);
    }

    bot.answer_callback_query(q.id)
        .text(t!("raffle.joined", locale = &language))
        .await?;
    Ok(())
}

async fn raffle_finish_callback(
    bot: Bot,
    q: CallbackQuery,
    raffle_id: String,
    db: &DatabaseManager,
) -> HandlerResult {
    let Some(raffle) = Raffle::find_by_id(&db.pool, &raffle_id).await? else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    let chat = Chat::get_or_create(&db.pool, raffle.telegram_chat_id).await?;
    let language = chat.language.clone();

    if raffle.is_finished() {
        bot.answer_callback_query(q.id)
            .text(t!("raffle.already_finished", locale = &language))
            .await?;
        return Ok(());
    }

    if !checks::is_chat_admin(&bot, ChatId(raffle.telegram_chat_id), q.from.id).await {
        bot.answer_callback_query(q.id)
            .text(t!("raffle.finish_not_admin", locale = &language))
            .await?;
        return Ok(());
    }

    let participants = RaffleParticipant::find_by_raffle(&db.pool, &raffle.id).await?;
    Raffle::finish(&db.pool, &raffle.id).await?;

    if participants.is_empty() {
        bot.send_message(
            ChatId(raffle.telegram_chat_id),
            t!("raffle.no_participants", locale = &language),
        )
        .await?;
    } else {
        let winners = pick_winners(
            &participants,
            chat.number_of_winners.max(1) as usize,
            &mut rand::thread_rng(),
        );
        let names = winners
            .iter()
            .map(|winner| {
                winner
                    .display_name
                    .clone()
                    .unwrap_or_else(|| winner.user_id.to_string())
            })
            .collect::<Vec<_>>()
            .join(", ");

        let template = chat
            .winner_message
            .clone()
            .unwrap_or_else(|| t!("winner.default", locale = &language));
        let text = render_winner_message(&template, participants.len() as i64, &names);
        bot.send_message(ChatId(raffle.telegram_chat_id), text).await?;

        tracing::info!(
            "Finished raffle {} in chat {} with {} participant(s)",
            raffle.id,
            raffle.telegram_chat_id,
            participants.len()
        );
    }

    let raffle_chat = ChatId(raffle.telegram_chat_id);
    let raffle_message = MessageId(raffle.message_id as i32);
    if chat.keep_raffle_message {
        if let Err(err) = bot
            .edit_message_reply_markup(raffle_chat, raffle_message)
            .await
        {
            warn!("Failed to strip raffle keyboard {}: {}", raffle.id, err);
        }
    } else if let Err(err) = bot.delete_message(raffle_chat, raffle_message).await {
        warn!("Failed to delete raffle message {}: {}", raffle.id, err);
    }

    bot.answer_callback_query(q.id).await?;
    Ok(())
}
