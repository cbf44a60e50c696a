use std::future::Future;
use std::time::Duration;
use sqlx::PgPool;
use tokio::time::timeout;
use uuid::Uuid;
use shared::models::TeamChoice;
use crate::store::{StoreError, VoteCounts, VoteStore};

/// Postgres-backed vote store. The primary key on (game_id, voter_id) is the
/// concurrency control; no application-level locking exists anywhere above
/// it. Every call is bounded by `op_timeout` so a wedged pool surfaces as a
/// transient failure instead of a hang.
pub struct PgVoteStore {
    pool: PgPool,
    op_timeout: Duration,
}

impl PgVoteStore {
    pub fn new(pool: PgPool, op_timeout: Duration) -> Self {
        Self { pool, op_timeout }
    }

    async fn bounded<T, F>(&self, query: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        timeout(self.op_timeout, query)
            .await
            .map_err(|_| StoreError::Timeout)?
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn count_for(&self, game_id: Uuid, choice: TeamChoice) -> Result<i64, StoreError> {
        self.bounded(
            sqlx::query_scalar(
                "SELECT COUNT(*) FROM game_votes WHERE game_id = $1 AND choice = $2",
            )
            .bind(game_id)
            .bind(choice.as_str())
            .fetch_one(&self.pool),
        )
        .await
    }
}

#[rocket::async_trait]
impl VoteStore for PgVoteStore {
    async fn cast(
        &self,
        game_id: Uuid,
        voter_id: Uuid,
        choice: TeamChoice,
    ) -> Result<(), StoreError> {
        // Simultaneous casts by the same voter collapse onto the conflict
        // target; the later writer's choice sticks.
        self.bounded(
            sqlx::query(
                "INSERT INTO game_votes (game_id, voter_id, choice)
                 VALUES ($1, $2, $3)
                 ON CONFLICT (game_id, voter_id)
                 DO UPDATE SET choice = EXCLUDED.choice, updated_at = NOW()",
            )
            .bind(game_id)
            .bind(voter_id)
            .bind(choice.as_str())
            .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn clear(&self, game_id: Uuid, voter_id: Uuid) -> Result<(), StoreError> {
        self.bounded(
            sqlx::query("DELETE FROM game_votes WHERE game_id = $1 AND voter_id = $2")
                .bind(game_id)
                .bind(voter_id)
                .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn counts(&self, game_id: Uuid) -> Result<VoteCounts, StoreError> {
        // Two independent reads, deliberately not one snapshot: a vote that
        // lands between them can skew the pair by one until the next read.
        let count_a = self.count_for(game_id, TeamChoice::A).await?;
        let count_b = self.count_for(game_id, TeamChoice::B).await?;
        Ok(VoteCounts { count_a, count_b })
    }

    async fn vote_of(
        &self,
        game_id: Uuid,
        voter_id: Uuid,
    ) -> Result<Option<TeamChoice>, StoreError> {
        let choice: Option<String> = self
            .bounded(
                sqlx::query_scalar(
                    "SELECT choice FROM game_votes WHERE game_id = $1 AND voter_id = $2",
                )
                .bind(game_id)
                .bind(voter_id)
                .fetch_optional(&self.pool),
            )
            .await?;
        Ok(choice.as_deref().and_then(TeamChoice::from_canonical))
    }
}
