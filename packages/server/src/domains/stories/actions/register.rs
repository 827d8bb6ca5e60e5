use tracing::info;

use super::{optional_field, required_field};
use crate::common::{AppError, AppResult};
use crate::domains::stories::models::{is_web_link, NewStory, Story};
use crate::kernel::ServerDeps;

/// Register a new story from the backoffice form.
///
/// All fields are validated and the identifier checked for uniqueness before
/// anything is written, so a rejected submission leaves the worksheet untouched.
pub async fn register_story(input: NewStory, deps: &ServerDeps) -> AppResult<Story> {
    let story = NewStory {
        id: input.id,
        title: required_field(&input.title, "Título")?,
        project: required_field(&input.project, "Projeto")?,
        document_link: required_field(&input.document_link, "Link")?,
        owner: optional_field(input.owner),
    };

    if !is_web_link(&story.document_link) {
        return Err(AppError::Validation(
            "O campo \"Link\" deve começar com http:// ou https://".to_string(),
        ));
    }

    let existing = Story::find_all(deps.stories.as_ref()).await?;
    if existing.iter().any(|s| s.id == story.id) {
        return Err(AppError::DuplicateStory(story.id.to_string()));
    }

    let created = Story::create(story, deps.stories.as_ref()).await?;

    info!(
        story_id = %created.id,
        project = %created.project,
        row = created.row_index(),
        "Story registered"
    );

    Ok(created)
}
