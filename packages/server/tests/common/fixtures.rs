//! Test fixtures for creating test data.
//!
//! These fixtures call the domain actions directly.

use approval_core::common::StoryId;
use approval_core::domains::stories::{register_story, submit_vote, NewStory, NewVote, Story};
use approval_core::domains::tally::{AggregateStatus, Decision};
use approval_core::kernel::ServerDeps;

pub fn story_id(raw: &str) -> StoryId {
    StoryId::parse(raw).expect("valid story id")
}

/// Register a story with placeholder title, project and link
pub async fn create_test_story(deps: &ServerDeps, id: &str) -> Story {
    let new_story = NewStory::builder()
        .id(story_id(id))
        .title(format!("Título de {}", id))
        .project("Portal do Cliente")
        .document_link(format!("https://wiki.example.com/{}", id))
        .build();

    register_story(new_story, deps)
        .await
        .expect("Failed to register story")
}

/// Record a decision from `voter`, returning the resolved status
pub async fn cast_vote(deps: &ServerDeps, id: &str, voter: &str, decision: Decision) -> AggregateStatus {
    let vote = NewVote::builder().voter(voter).decision(decision).build();
    submit_vote(&story_id(id), vote, deps)
        .await
        .expect("Failed to submit vote")
        .status
}
