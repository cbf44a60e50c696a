use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;
use shared::error::VoteError;
use shared::models::TeamChoice;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store call timed out")]
    Timeout,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for VoteError {
    fn from(error: StoreError) -> Self {
        VoteError::Transient(error.to_string())
    }
}

/// Per-side tallies for one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteCounts {
    pub count_a: i64,
    pub count_b: i64,
}

/// A persisted pick. Rows are owned exclusively by the store
/// implementations; everything else reads them through [`VoteStore`].
#[derive(Debug, Clone)]
pub struct StoredVote {
    pub choice: TeamChoice,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Durable keyed vote storage. At most one row exists per (game, voter)
/// pair, and `cast` must be atomic with respect to concurrent callers on the
/// same key: a duplicate-key race resolves to a single row with last write
/// winning on `choice`, never to multiplied rows.
#[rocket::async_trait]
pub trait VoteStore: Send + Sync {
    /// Idempotent upsert: overwrite the existing pick or insert a new one.
    async fn cast(
        &self,
        game_id: Uuid,
        voter_id: Uuid,
        choice: TeamChoice,
    ) -> Result<(), StoreError>;

    /// Deletes the pick if present. Absence is a no-op, not an error.
    async fn clear(&self, game_id: Uuid, voter_id: Uuid) -> Result<(), StoreError>;

    async fn counts(&self, game_id: Uuid) -> Result<VoteCounts, StoreError>;

    async fn vote_of(
        &self,
        game_id: Uuid,
        voter_id: Uuid,
    ) -> Result<Option<TeamChoice>, StoreError>;
}

pub type VoteMap = HashMap<(Uuid, Uuid), StoredVote>;

/// In-memory store backing the test suite. The map key is the unique
/// constraint and the mutex the atomicity, giving the same observable
/// semantics as the Postgres implementation.
#[derive(Debug, Default)]
pub struct MemoryVoteStore {
    votes: Mutex<VoteMap>,
}

impl MemoryVoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[rocket::async_trait]
impl VoteStore for MemoryVoteStore {
    async fn cast(
        &self,
        game_id: Uuid,
        voter_id: Uuid,
        choice: TeamChoice,
    ) -> Result<(), StoreError> {
        let mut votes = self
            .votes
            .lock()
            .map_err(|_| StoreError::Unavailable("vote map lock poisoned".into()))?;
        let now = OffsetDateTime::now_utc();
        votes
            .entry((game_id, voter_id))
            .and_modify(|vote| {
                vote.choice = choice;
                vote.updated_at = now;
            })
            .or_insert(StoredVote {
                choice,
                created_at: now,
                updated_at: now,
            });
        Ok(())
    }

    async fn clear(&self, game_id: Uuid, voter_id: Uuid) -> Result<(), StoreError> {
        let mut votes = self
            .votes
            .lock()
            .map_err(|_| StoreError::Unavailable("vote map lock poisoned".into()))?;
        votes.remove(&(game_id, voter_id));
        Ok(())
    }

    async fn counts(&self, game_id: Uuid) -> Result<VoteCounts, StoreError> {
        let votes = self
            .votes
            .lock()
            .map_err(|_| StoreError::Unavailable("vote map lock poisoned".into()))?;
        let mut counts = VoteCounts::default();
        for ((vote_game, _), vote) in votes.iter() {
            if *vote_game != game_id {
                continue;
            }
            match vote.choice {
                TeamChoice::A => counts.count_a += 1,
                TeamChoice::B => counts.count_b += 1,
            }
        }
        Ok(counts)
    }

    async fn vote_of(
        &self,
        game_id: Uuid,
        voter_id: Uuid,
    ) -> Result<Option<TeamChoice>, StoreError> {
        let votes = self
            .votes
            .lock()
            .map_err(|_| StoreError::Unavailable("vote map lock poisoned".into()))?;
        Ok(votes.get(&(game_id, voter_id)).map(|vote| vote.choice))
    }
}
