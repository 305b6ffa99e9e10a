use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use super::views;
use crate::error::TodoError;

/// Errors a handler can return.
///
/// Domain lookups that miss become a 404 page. Infrastructure failures are
/// logged in full server-side and reported to the client as a bare 500.
/// Handlers re-render the form on validation errors, so one reaching this
/// type counts as internal.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(TodoError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<TodoError> for ApiError {
    fn from(e: TodoError) -> Self {
        if e.is_not_found() {
            Self::NotFound(e)
        } else {
            Self::Internal(anyhow::anyhow!("Unhandled validation error: {}", e))
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(e) => {
                tracing::debug!("Not found: {}", e);
                (
                    StatusCode::NOT_FOUND,
                    Html(views::error_page("Not Found", &e.to_string())),
                )
                    .into_response()
            }
            Self::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
