use tracing::debug;
use uuid::Uuid;
use shared::error::{Result, VoteError};
use shared::models::{TeamChoice, VoteSummary};
use shared::tally;
use shared::viewer::Viewer;
use crate::store::VoteStore;

/// The service layer: validates, gates writes on identity, delegates to the
/// store, and recomputes the read-side projection after every write. Holds
/// no state of its own.
pub struct VoteProcessor;

impl VoteProcessor {
    /// Public read. The viewer's own pick is only looked up when an identity
    /// is present; anonymous reads skip that round trip entirely.
    pub async fn read_summary(
        store: &dyn VoteStore,
        game_id: Uuid,
        viewer: Viewer,
    ) -> Result<VoteSummary> {
        let counts = store.counts(game_id).await?;
        let viewer_choice = match viewer.user_id {
            Some(voter_id) => store.vote_of(game_id, voter_id).await?,
            None => None,
        };
        Ok(tally::summarize(counts.count_a, counts.count_b, viewer_choice))
    }

    pub async fn cast_vote(
        store: &dyn VoteStore,
        game_id: Uuid,
        viewer: Viewer,
        raw_choice: Option<&str>,
    ) -> Result<VoteSummary> {
        let voter_id = viewer.user_id.ok_or(VoteError::Unauthorized)?;
        let choice = raw_choice
            .and_then(TeamChoice::normalize)
            .ok_or(VoteError::InvalidChoice)?;

        store.cast(game_id, voter_id, choice).await?;
        debug!(%game_id, %voter_id, choice = choice.as_str(), "pick recorded");

        Self::read_summary(store, game_id, viewer).await
    }

    pub async fn clear_vote(
        store: &dyn VoteStore,
        game_id: Uuid,
        viewer: Viewer,
    ) -> Result<VoteSummary> {
        let voter_id = viewer.user_id.ok_or(VoteError::Unauthorized)?;

        store.clear(game_id, voter_id).await?;
        debug!(%game_id, %voter_id, "pick cleared");

        Self::read_summary(store, game_id, viewer).await
    }
}
