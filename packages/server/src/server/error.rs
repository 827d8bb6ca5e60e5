//! HTTP mapping of application errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::common::AppError;
use crate::server::views::error::error_page;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::DuplicateStory(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::MissingColumns { .. } | AppError::InvalidRow { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::BackendUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::MissingColumns { available, .. } => {
                format!("🚨 {} Colunas disponíveis: {}", self, available.join(", "))
            }
            AppError::NotFound(_) => "História de Usuário não encontrada.".to_string(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "Request failed");
        } else {
            tracing::info!(error = %self, status = %status, "Request rejected");
        }

        let title = status.canonical_reason().unwrap_or("Erro");
        (status, error_page(title, &message)).into_response()
    }
}
