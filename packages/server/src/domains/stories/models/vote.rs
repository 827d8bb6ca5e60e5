use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::warn;
use typed_builder::TypedBuilder;

use super::{invalid_row, is_blank, parse_timestamp, read_sheet};
use crate::common::{AppResult, StoryId};
use crate::domains::tally::Decision;
use crate::kernel::{BaseRowStore, SheetRow};

/// Column headers of the vote worksheet
pub mod columns {
    pub const STORY_ID: &str = "ID_HU";
    pub const VOTER: &str = "Stakeholder";
    pub const DECISION: &str = "Decisão";
    pub const COMMENT: &str = "Observação";
    pub const SUBMITTED_AT: &str = "Registrado em";
}

/// Column order used when appending votes
pub const VOTE_COLUMNS: [&str; 5] = [
    columns::STORY_ID,
    columns::VOTER,
    columns::DECISION,
    columns::COMMENT,
    columns::SUBMITTED_AT,
];

pub const REQUIRED_VOTE_COLUMNS: [&str; 3] =
    [columns::STORY_ID, columns::VOTER, columns::DECISION];

/// Vote - one stakeholder decision on a story. Immutable once appended.
#[derive(Debug, Clone)]
pub struct Vote {
    pub story_id: StoryId,
    /// Freeform display name, not checked against any identity
    pub voter: String,
    pub decision: Decision,
    pub comment: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct NewVote {
    pub voter: String,
    pub decision: Decision,
    #[builder(default)]
    pub comment: Option<String>,
}

impl Vote {
    fn from_row(row: &SheetRow, store: &dyn BaseRowStore) -> AppResult<Self> {
        let story_id = row
            .non_empty(columns::STORY_ID)
            .ok_or_else(|| invalid_row(store, row, "ID_HU vazio"))?;

        // Unknown decisions are rejected here, never passed on to the tally
        let decision = row
            .get(columns::DECISION)
            .unwrap_or_default()
            .parse::<Decision>()
            .map_err(|e| invalid_row(store, row, e.to_string()))?;

        Ok(Self {
            story_id: StoryId::parse(story_id)?,
            voter: row.get(columns::VOTER).unwrap_or_default().trim().to_string(),
            decision,
            comment: row.non_empty(columns::COMMENT).map(String::from),
            submitted_at: parse_timestamp(row, columns::SUBMITTED_AT),
        })
    }

    // =========================================================================
    // Worksheet access - ALL vote reads and writes go through here
    // =========================================================================

    /// Votes of every story, grouped by story identifier, in insertion order.
    ///
    /// A row that fails to decode only poisons the entry of its own story, so
    /// one bad row does not hide the votes of every other story.
    pub async fn group_by_story(
        store: &dyn BaseRowStore,
    ) -> AppResult<HashMap<StoryId, AppResult<Vec<Self>>>> {
        let sheet = read_sheet(store, &REQUIRED_VOTE_COLUMNS).await?;

        let mut grouped: HashMap<StoryId, AppResult<Vec<Self>>> = HashMap::new();
        for row in sheet.rows.iter().filter(|row| !is_blank(row)) {
            let Some(raw_id) = row.non_empty(columns::STORY_ID) else {
                warn!(worksheet = store.worksheet(), row = row.index, "Vote row without ID_HU ignored");
                continue;
            };

            let entry = grouped
                .entry(StoryId::parse(raw_id)?)
                .or_insert_with(|| Ok(Vec::new()));
            match Self::from_row(row, store) {
                Ok(vote) => {
                    if let Ok(votes) = entry {
                        votes.push(vote);
                    }
                }
                Err(e) => {
                    if entry.is_ok() {
                        *entry = Err(e);
                    }
                }
            }
        }

        Ok(grouped)
    }

    /// Find the votes recorded for one story, in insertion order.
    ///
    /// Rows are matched on `ID_HU` before decoding; rows of other stories are
    /// never decoded.
    pub async fn find_by_story(story_id: &StoryId, store: &dyn BaseRowStore) -> AppResult<Vec<Self>> {
        let sheet = read_sheet(store, &REQUIRED_VOTE_COLUMNS).await?;
        sheet
            .rows
            .iter()
            .filter(|row| row.non_empty(columns::STORY_ID) == Some(story_id.as_str()))
            .map(|row| Self::from_row(row, store))
            .collect()
    }

    /// Append a vote for a story
    pub async fn create(story_id: &StoryId, new: NewVote, store: &dyn BaseRowStore) -> AppResult<Self> {
        let vote = Self {
            story_id: story_id.clone(),
            voter: new.voter,
            decision: new.decision,
            comment: new.comment,
            submitted_at: Some(Utc::now()),
        };

        store.append_row(vote.to_cells()).await?;
        Ok(vote)
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.story_id.to_string(),
            self.voter.clone(),
            self.decision.label().to_string(),
            self.comment.clone().unwrap_or_default(),
            self.submitted_at
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true))
                .unwrap_or_default(),
        ]
    }
}
