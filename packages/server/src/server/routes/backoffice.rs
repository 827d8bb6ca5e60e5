use axum::{
    extract::{Extension, Form, Query},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::common::AppError;
use crate::domains::stories::{list_stories, register_story};
use crate::server::app::AppState;
use crate::server::forms::{BackofficeQuery, RegisterStoryForm};
use crate::server::views::{backoffice::backoffice_page, notice};

/// Backoffice listing and registration form
pub async fn backoffice_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<BackofficeQuery>,
) -> Result<Response, AppError> {
    let stories = list_stories(&state.deps).await?;

    let flash = query
        .registered
        .map(|id| notice("success", &format!("HU {} registrada com sucesso!", id.trim())));

    Ok(backoffice_page(&stories, &RegisterStoryForm::default(), flash).into_response())
}

/// Register a story; input errors re-render the form with the values kept
pub async fn register_story_handler(
    Extension(state): Extension<AppState>,
    Form(form): Form<RegisterStoryForm>,
) -> Result<Response, AppError> {
    let result = match form.to_new_story() {
        Ok(new_story) => register_story(new_story, &state.deps).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(story) => Ok(Redirect::to(&format!(
            "/backoffice?registered={}",
            urlencoding::encode(story.id.as_str())
        ))
        .into_response()),
        Err(e) if e.is_user_error() => {
            let stories = list_stories(&state.deps).await?;
            let flash = Some(notice("error", &e.to_string()));
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                backoffice_page(&stories, &form, flash),
            )
                .into_response())
        }
        Err(e) => Err(e),
    }
}
