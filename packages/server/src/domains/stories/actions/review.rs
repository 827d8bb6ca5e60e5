use tracing::warn;

use crate::common::{AppError, AppResult, StoryId};
use crate::domains::stories::models::{Story, Vote};
use crate::domains::tally::{AggregateStatus, Tally};
use crate::kernel::ServerDeps;

/// A story with its status recomputed from the vote worksheet
#[derive(Debug, Clone)]
pub struct StorySummary {
    pub story: Story,
    pub tally: Tally,
    pub status: AggregateStatus,
    /// Set when a vote row of this story could not be read; `tally` and
    /// `status` are then not meaningful
    pub vote_error: Option<String>,
}

/// Everything the approval page shows for one story
#[derive(Debug, Clone)]
pub struct StoryReview {
    pub story: Story,
    /// Votes in insertion order
    pub votes: Vec<Vote>,
    pub tally: Tally,
    pub status: AggregateStatus,
}

/// List every story for the backoffice, one scan of each worksheet
pub async fn list_stories(deps: &ServerDeps) -> AppResult<Vec<StorySummary>> {
    let stories = Story::find_all(deps.stories.as_ref()).await?;
    let votes = Vote::group_by_story(deps.votes.as_ref()).await?;

    Ok(stories
        .into_iter()
        .map(|story| {
            let (tally, vote_error) = match votes.get(&story.id) {
                None => (Tally::default(), None),
                Some(Ok(votes)) => (Tally::from_decisions(votes.iter().map(|v| v.decision)), None),
                Some(Err(e)) => {
                    warn!(story_id = %story.id, error = %e, "Votes of story could not be read");
                    (Tally::default(), Some(e.to_string()))
                }
            };
            StorySummary {
                status: tally.resolve(),
                tally,
                vote_error,
                story,
            }
        })
        .collect())
}

/// Open one story for review
pub async fn open_story(id: &StoryId, deps: &ServerDeps) -> AppResult<StoryReview> {
    let story = Story::find_by_id(id, deps.stories.as_ref())
        .await?
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    let votes = Vote::find_by_story(id, deps.votes.as_ref()).await?;
    let tally = Tally::from_decisions(votes.iter().map(|v| v.decision));

    if story.cached_status.is_some_and(|cached| cached != tally.resolve()) {
        tracing::debug!(
            story_id = %id,
            cached = ?story.cached_status,
            "Cached status is stale"
        );
    }

    Ok(StoryReview {
        status: tally.resolve(),
        story,
        votes,
        tally,
    })
}
