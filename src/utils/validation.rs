use anyhow::{anyhow, Result};

pub fn validate_telegram_chat_id(chat_id: i64) -> Result<()> {
    // Telegram chat IDs should be non-zero
    if chat_id == 0 {
        return Err(anyhow!("Chat ID cannot be zero"));
    }

    // Positive IDs should be within reasonable range for user chats (up to 2^31-1)
    if chat_id > 2147483647 {
        return Err(anyhow!("Invalid user chat ID range"));
    }

    // Negative IDs can be:
    // - Group chats: small negative numbers like -12345 (up to around -2^31)
    // - Supergroups and channels: very large negative numbers starting around -1000000000000
    // Reject extremely large negative numbers beyond Telegram's known ranges
    if chat_id < -2000000000000 {
        return Err(anyhow!("Chat ID out of valid range"));
    }

    Ok(())
}

pub fn validate_number_of_winners(count: i64) -> Result<()> {
    if !(1..=10).contains(&count) {
        return Err(anyhow!("Number of winners must be between 1 and 10"));
    }
    Ok(())
}
