use anyhow::Result;
use chrono::{Duration, Utc};
use raffle_bot::database::{connection::DatabaseManager, models::*};
use tempfile::{tempdir, TempDir};

async fn setup_test_db() -> Result<(DatabaseManager, TempDir)> {
    let temp_dir = tempdir()?;
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite:{}", db_path.display());

    let db_manager = DatabaseManager::new(&database_url).await?;
    db_manager.run_migrations().await?;

    Ok((db_manager, temp_dir))
}

#[tokio::test]
async fn test_chat_creation_and_retrieval() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let chat_id = -1001234567890i64;

    let chat = Chat::get_or_create(&db.pool, chat_id).await?;
    assert_eq!(chat.telegram_chat_id, chat_id);
    assert_eq!(chat.language, "en");
    assert_eq!(chat.number_of_winners, 1);
    assert!(!chat.check_subscription);
    assert!(!chat.keep_raffle_message);
    assert!(!chat.configurable);
    assert!(chat.raffle_message.is_none());
    assert!(chat.winner_message.is_none());
    assert!(chat.edited_chat_id.is_none());

    // One record per chat id
    let again = Chat::get_or_create(&db.pool, chat_id).await?;
    assert_eq!(again.id, chat.id);

    let found = Chat::find_by_chat_id(&db.pool, chat_id).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, chat.id);

    Ok(())
}

#[tokio::test]
async fn test_chat_not_found() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    let found = Chat::find_by_chat_id(&db.pool, 99999).await?;
    assert!(found.is_none());

    Ok(())
}

#[tokio::test]
async fn test_chat_settings_updates() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let chat_id = -100500i64;
    Chat::get_or_create(&db.pool, chat_id).await?;

    Chat::set_language(&db.pool, chat_id, "ru").await?;
    Chat::set_number_of_winners(&db.pool, chat_id, 3).await?;
    Chat::set_check_subscription(&db.pool, chat_id, true).await?;
    Chat::set_keep_raffle_message(&db.pool, chat_id, true).await?;

    let chat = Chat::find_by_chat_id(&db.pool, chat_id).await?.unwrap();
    assert_eq!(chat.language, "ru");
    assert_eq!(chat.number_of_winners, 3);
    assert!(chat.check_subscription);
    assert!(chat.keep_raffle_message);

    Ok(())
}

#[tokio::test]
async fn test_saving_template_clears_pending_setup_message() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let chat_id = -100600i64;
    Chat::get_or_create(&db.pool, chat_id).await?;

    Chat::set_raffle_setup_message_id(&db.pool, chat_id, Some(111)).await?;
    Chat::set_winner_setup_message_id(&db.pool, chat_id, Some(222)).await?;

    let chat = Chat::find_by_chat_id(&db.pool, chat_id).await?.unwrap();
    assert_eq!(chat.raffle_setup_message_id, Some(111));
    assert_eq!(chat.winner_setup_message_id, Some(222));

    Chat::set_raffle_message(&db.pool, chat_id, Some("Join! $numberOfParticipants in")).await?;
    Chat::set_winner_message(
        &db.pool,
        chat_id,
        Some("$winner of $numberOfParticipants wins"),
    )
    .await?;

    let chat = Chat::find_by_chat_id(&db.pool, chat_id).await?.unwrap();
    assert_eq!(
        chat.raffle_message.as_deref(),
        Some("Join! $numberOfParticipants in")
    );
    assert!(chat.raffle_setup_message_id.is_none());
    assert!(chat.winner_setup_message_id.is_none());

    // Clearing the template also works
    Chat::set_raffle_message(&db.pool, chat_id, None).await?;
    let chat = Chat::find_by_chat_id(&db.pool, chat_id).await?.unwrap();
    assert!(chat.raffle_message.is_none());

    Ok(())
}

#[tokio::test]
async fn test_configurable_list_and_edited_references() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let channel_id = -1009000i64;
    let private_id = 777i64;

    Chat::get_or_create(&db.pool, channel_id).await?;
    Chat::get_or_create(&db.pool, private_id).await?;

    Chat::set_configurable(&db.pool, channel_id, true, Some("My Channel")).await?;
    let configurable = Chat::list_configurable(&db.pool).await?;
    assert_eq!(configurable.len(), 1);
    assert_eq!(configurable[0].telegram_chat_id, channel_id);
    assert_eq!(configurable[0].title.as_deref(), Some("My Channel"));

    Chat::set_edited_chat_id(&db.pool, private_id, Some(channel_id)).await?;
    let private = Chat::find_by_chat_id(&db.pool, private_id).await?.unwrap();
    assert_eq!(private.edited_chat_id, Some(channel_id));

    // Bot kicked from the channel: it disappears from the list and the
    // private chat stops pointing at it
    Chat::set_configurable(&db.pool, channel_id, false, None).await?;
    Chat::clear_edited_chat_references(&db.pool, channel_id).await?;

    assert!(Chat::list_configurable(&db.pool).await?.is_empty());
    let private = Chat::find_by_chat_id(&db.pool, private_id).await?.unwrap();
    assert!(private.edited_chat_id.is_none());

    Ok(())
}

#[tokio::test]
async fn test_chat_delete() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let chat_id = 123i64;

    Chat::get_or_create(&db.pool, chat_id).await?;
    assert!(Chat::delete(&db.pool, chat_id).await?);
    assert!(Chat::find_by_chat_id(&db.pool, chat_id).await?.is_none());

    // Deleting a missing record reports false
    assert!(!Chat::delete(&db.pool, chat_id).await?);

    Ok(())
}

#[tokio::test]
async fn test_raffle_lifecycle() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let chat_id = -1002000i64;

    let raffle = Raffle::create(&db.pool, "raffle-1", chat_id, 555).await?;
    assert_eq!(raffle.status, RAFFLE_STATUS_ACTIVE);
    assert!(!raffle.is_finished());

    let found = Raffle::find_by_id(&db.pool, "raffle-1").await?.unwrap();
    assert_eq!(found.telegram_chat_id, chat_id);
    assert_eq!(found.message_id, 555);

    // Joining is idempotent per user
    assert!(RaffleParticipant::add(&db.pool, "raffle-1", 1, Some("@alice")).await?);
    assert!(!RaffleParticipant::add(&db.pool, "raffle-1", 1, Some("@alice")).await?);
    assert!(RaffleParticipant::add(&db.pool, "raffle-1", 2, Some("@bob")).await?);

    assert_eq!(RaffleParticipant::count(&db.pool, "raffle-1").await?, 2);
    let participants = RaffleParticipant::find_by_raffle(&db.pool, "raffle-1").await?;
    assert_eq!(participants.len(), 2);

    Raffle::finish(&db.pool, "raffle-1").await?;
    let finished = Raffle::find_by_id(&db.pool, "raffle-1").await?.unwrap();
    assert!(finished.is_finished());

    Ok(())
}

#[tokio::test]
async fn test_tracked_message_pruning() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    TrackedMessage::track(&db.pool, 10, 100).await?;
    TrackedMessage::track(&db.pool, 10, 101).await?;
    TrackedMessage::track(&db.pool, 20, 100).await?;

    // Nothing is stale yet
    let past_cutoff = (Utc::now() - Duration::hours(24)).to_rfc3339();
    assert!(TrackedMessage::find_older_than(&db.pool, &past_cutoff)
        .await?
        .is_empty());

    // Everything is stale against a future cutoff
    let future_cutoff = (Utc::now() + Duration::hours(1)).to_rfc3339();
    let stale = TrackedMessage::find_older_than(&db.pool, &future_cutoff).await?;
    assert_eq!(stale.len(), 3);

    TrackedMessage::remove(&db.pool, 10, 100).await?;
    let stale = TrackedMessage::find_older_than(&db.pool, &future_cutoff).await?;
    assert_eq!(stale.len(), 2);
    assert!(!stale
        .iter()
        .any(|m| m.chat_id == 10 && m.message_id == 100));

    Ok(())
}
