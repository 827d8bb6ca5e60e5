//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    approval_handler, backoffice_handler, health_handler, register_story_handler,
    submit_decision_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps) -> Router {
    let app_state = AppState {
        deps: Arc::new(deps),
    };

    Router::new()
        .route("/", get(|| async { Redirect::to("/backoffice") }))
        // Backoffice: list + register
        .route("/backoffice", get(backoffice_handler))
        .route("/backoffice/stories", post(register_story_handler))
        // Approval page: view + decide
        .route(
            "/approval",
            get(approval_handler).post(submit_decision_handler),
        )
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
}
