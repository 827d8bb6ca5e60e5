use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    row_store: RowStoreHealth,
}

#[derive(Serialize)]
pub struct RowStoreHealth {
    status: String,
    worksheet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Scans the story worksheet with a 5 second timeout.
///
/// Returns 200 OK if the row store answers, 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let store = state.deps.stories.clone();
    let worksheet = store.worksheet().to_string();

    let row_store = match tokio::time::timeout(
        std::time::Duration::from_secs(5),
        store.list_rows(),
    )
    .await
    {
        Ok(Ok(sheet)) => RowStoreHealth {
            status: "ok".to_string(),
            worksheet,
            rows: Some(sheet.rows.len()),
            error: None,
        },
        Ok(Err(e)) => RowStoreHealth {
            status: "error".to_string(),
            worksheet,
            rows: None,
            error: Some(format!("List failed: {:#}", e)),
        },
        Err(_) => RowStoreHealth {
            status: "error".to_string(),
            worksheet,
            rows: None,
            error: Some("List timeout (>5s)".to_string()),
        },
    };

    let is_healthy = row_store.status == "ok";

    let overall_status = if is_healthy { "healthy" } else { "unhealthy" };

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: overall_status.to_string(),
            row_store,
        }),
    )
}
