//! Stories - registration of HUs and stakeholder decisions on them.
//!
//! Components:
//! - models: Story and Vote records over the row store
//! - actions: entry points called by the backoffice and approval routes

pub mod actions;
pub mod models;

pub use actions::*;
pub use models::{is_web_link, NewStory, NewVote, Story, Vote, STORY_COLUMNS, VOTE_COLUMNS};
