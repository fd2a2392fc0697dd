use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Failures that cannot be shown in the status banner
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!(status = %status.as_u16(), error = %self, "server error");

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
