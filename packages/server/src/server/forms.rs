//! Form and query payloads of the two pages.

use serde::Deserialize;

use crate::common::{AppResult, StoryId};
use crate::domains::stories::{NewStory, NewVote};
use crate::domains::tally::Decision;

/// Backoffice registration form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterStoryForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub owner: String,
}

impl RegisterStoryForm {
    pub fn to_new_story(&self) -> AppResult<NewStory> {
        Ok(NewStory::builder()
            .id(StoryId::parse(&self.id)?)
            .title(self.title.clone())
            .project(self.project.clone())
            .document_link(self.link.clone())
            .owner(Some(self.owner.clone()))
            .build())
    }
}

/// Approval page decision form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DecisionForm {
    #[serde(default)]
    pub decision: String,
    #[serde(default)]
    pub voter_name: String,
    #[serde(default)]
    pub comment: String,
}

impl DecisionForm {
    /// Unknown decision values are rejected here, before a vote exists
    pub fn to_new_vote(&self) -> AppResult<NewVote> {
        let decision: Decision = self.decision.parse()?;
        Ok(NewVote::builder()
            .voter(self.voter_name.clone())
            .decision(decision)
            .comment(Some(self.comment.clone()))
            .build())
    }

    pub fn selected(&self) -> Option<Decision> {
        self.decision.parse().ok()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackofficeQuery {
    pub registered: Option<String>,
}

/// Query of the approval page. `page` is accepted as an alias of `id`
/// for links produced by older listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApprovalQuery {
    pub id: Option<String>,
    pub page: Option<String>,
    pub recorded: Option<String>,
}

impl ApprovalQuery {
    /// Requested story identifier, `None` when neither parameter is given
    pub fn story_id(&self) -> Option<AppResult<StoryId>> {
        self.id
            .as_deref()
            .or(self.page.as_deref())
            .map(StoryId::parse)
    }
}
