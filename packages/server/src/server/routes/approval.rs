use axum::{
    extract::{Extension, Form, Query},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::common::{AppResult, StoryId};
use crate::domains::stories::{open_story, submit_vote};
use crate::server::app::AppState;
use crate::server::forms::{ApprovalQuery, DecisionForm};
use crate::server::views::{approval::approval_page, approval_path, error::error_page, notice};

fn requested_story(query: &ApprovalQuery) -> Result<StoryId, Response> {
    match query.story_id() {
        Some(Ok(id)) => Ok(id),
        Some(Err(_)) | None => Err((
            StatusCode::BAD_REQUEST,
            error_page("Bad Request", "ID da HU não especificado."),
        )
            .into_response()),
    }
}

/// Approval page for the story named in the query string
pub async fn approval_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<ApprovalQuery>,
) -> AppResult<Response> {
    let id = match requested_story(&query) {
        Ok(id) => id,
        Err(response) => return Ok(response),
    };

    let review = open_story(&id, &state.deps).await?;
    let flash = query
        .recorded
        .is_some()
        .then(|| notice("success", "Ação registrada com sucesso!"));

    Ok(approval_page(&review, &DecisionForm::default(), flash).into_response())
}

/// Record a decision, then redirect back to the approval page
pub async fn submit_decision_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<ApprovalQuery>,
    Form(form): Form<DecisionForm>,
) -> AppResult<Response> {
    let id = match requested_story(&query) {
        Ok(id) => id,
        Err(response) => return Ok(response),
    };

    let result = match form.to_new_vote() {
        Ok(new_vote) => submit_vote(&id, new_vote, &state.deps).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => Ok(Redirect::to(&format!("{}&recorded=1", approval_path(&id))).into_response()),
        Err(e) if e.is_user_error() => {
            let review = open_story(&id, &state.deps).await?;
            let flash = Some(notice("error", &e.to_string()));
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                approval_page(&review, &form, flash),
            )
                .into_response())
        }
        Err(e) => Err(e),
    }
}
