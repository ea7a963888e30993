use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const RAFFLE_STATUS_ACTIVE: &str = "active";
pub const RAFFLE_STATUS_FINISHED: &str = "finished";

/// A single raffle run, anchored to the message the bot posted for it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Raffle {
    pub id: String,
    pub telegram_chat_id: i64,
    pub message_id: i64,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct RaffleParticipant {
    pub raffle_id: String,
    pub user_id: i64,
    pub display_name: Option<String>,
    pub joined_at: String,
}

impl Raffle {
    pub async fn create(
        pool: &sqlx::SqlitePool,
        id: &str,
        chat_id: i64,
        message_id: i64,
    ) -> Result<Self, sqlx::Error> {
        let created_at = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO raffles (id, telegram_chat_id, message_id, status, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(chat_id)
        .bind(message_id)
        .bind(RAFFLE_STATUS_ACTIVE)
        .bind(&created_at)
        .execute(pool)
        .await?;

        Ok(Raffle {
            id: id.to_string(),
            telegram_chat_id: chat_id,
            message_id,
            status: RAFFLE_STATUS_ACTIVE.to_string(),
            created_at,
        })
    }

    pub async fn find_by_id(
        pool: &sqlx::SqlitePool,
        id: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Raffle>("SELECT * FROM raffles WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub fn is_finished(&self) -> bool {
        self.status == RAFFLE_STATUS_FINISHED
    }

    pub async fn finish(
        pool: &sqlx::SqlitePool,
        id: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE raffles SET status = ? WHERE id = ?")
            .bind(RAFFLE_STATUS_FINISHED)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

impl RaffleParticipant {
    /// Registers a participant. Returns `false` when the user already joined.
    pub async fn add(
        pool: &sqlx::SqlitePool,
        raffle_id: &str,
        user_id: i64,
        display_name: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let joined_at = Utc::now().to_rfc3339();
        let result = sqlx::query(
            "INSERT OR IGNORE INTO raffle_participants (raffle_id, user_id, display_name, joined_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(raffle_id)
        .bind(user_id)
        .bind(display_name)
        .bind(&joined_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(
        pool: &sqlx::SqlitePool,
        raffle_id: &str,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM raffle_participants WHERE raffle_id = ?",
        )
        .bind(raffle_id)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_raffle(
        pool: &sqlx::SqlitePool,
        raffle_id: &str,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, RaffleParticipant>(
            "SELECT * FROM raffle_participants WHERE raffle_id = ? ORDER BY joined_at",
        )
        .bind(raffle_id)
        .fetch_all(pool)
        .await
    }
}

/// Draws up to `count` distinct winners uniformly at random. When there are
/// fewer participants than requested, everybody wins.
pub fn pick_winners<'a, R: rand::Rng + ?Sized>(
    participants: &'a [RaffleParticipant],
    count: usize,
    rng: &mut R,
) -> Vec<&'a RaffleParticipant> {
    use rand::seq::SliceRandom;

    let mut drawn: Vec<&RaffleParticipant> = participants.iter().collect();
    drawn.shuffle(rng);
    drawn.truncate(count);
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn participant(user_id: i64) -> RaffleParticipant {
        RaffleParticipant {
            raffle_id: "r".to_string(),
            user_id,
            display_name: Some(format!("user{user_id}")),
            joined_at: "2024-05-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn picks_requested_number_of_distinct_winners() {
        let participants: Vec<_> = (1..=20).map(participant).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let winners = pick_winners(&participants, 3, &mut rng);

        assert_eq!(winners.len(), 3);
        let mut ids: Vec<_> = winners.iter().map(|w| w.user_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn everybody_wins_when_fewer_participants_than_winners() {
        let participants: Vec<_> = (1..=2).map(participant).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let winners = pick_winners(&participants, 5, &mut rng);

        assert_eq!(winners.len(), 2);
    }

    #[test]
    fn no_participants_no_winners() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_winners(&[], 3, &mut rng).is_empty());
    }
}
