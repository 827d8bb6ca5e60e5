use tracing::{info, warn};

use super::{optional_field, required_field};
use crate::common::{AppError, AppResult, StoryId};
use crate::domains::stories::models::{NewVote, Story, Vote};
use crate::domains::tally::{AggregateStatus, Tally};
use crate::kernel::ServerDeps;

/// Result of recording a decision
#[derive(Debug, Clone)]
pub struct VoteOutcome {
    pub vote: Vote,
    pub tally: Tally,
    pub status: AggregateStatus,
}

/// Record a stakeholder decision and refresh the story's cached status.
///
/// The story's existing votes are read before the append, so an unreadable
/// vote set fails the request without writing anything. The status is then
/// resolved from the vote worksheet as re-read after the append, so votes
/// submitted concurrently by other stakeholders are counted too.
pub async fn submit_vote(id: &StoryId, input: NewVote, deps: &ServerDeps) -> AppResult<VoteOutcome> {
    let new_vote = NewVote {
        voter: required_field(&input.voter, "Nome")?,
        decision: input.decision,
        comment: optional_field(input.comment),
    };

    let mut story = Story::find_by_id(id, deps.stories.as_ref())
        .await?
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    let prior = Vote::find_by_story(id, deps.votes.as_ref()).await?;

    let vote = Vote::create(id, new_vote, deps.votes.as_ref()).await?;

    // From here on the vote is stored, so failures are logged, not returned
    let tally = match Vote::find_by_story(id, deps.votes.as_ref()).await {
        Ok(votes) => Tally::from_decisions(votes.iter().map(|v| v.decision)),
        Err(e) => {
            warn!(story_id = %id, error = %e, "Failed to re-read votes, resolving from prior votes");
            let mut tally = Tally::from_decisions(prior.iter().map(|v| v.decision));
            tally.record(vote.decision);
            tally
        }
    };
    let status = tally.resolve();

    info!(
        story_id = %id,
        voter = %vote.voter,
        decision = %vote.decision,
        status = %status,
        votes = tally.total(),
        "Vote recorded"
    );

    if story.cached_status != Some(status) {
        // Every read recomputes, a failed write only leaves a stale hint
        if let Err(e) = story
            .write_cached_status(status, deps.stories.as_ref())
            .await
        {
            warn!(story_id = %id, error = %e, "Failed to write cached status");
        }
    }

    Ok(VoteOutcome {
        vote,
        tally,
        status,
    })
}
