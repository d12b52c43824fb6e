//! Error responses for HTTP handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cukur_core::Error as CoreError;
use thiserror::Error;

/// Failure of a request handler
///
/// Rendered as a plain-text body holding the raw error message.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Template(#[from] askama::Error),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Core(_) | ServerError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ServerError::Core(err) => err.code(),
            ServerError::Template(_) => "TEMPLATE_ERROR",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(code = self.code(), error = %self, "request failed");
        (status, self.to_string()).into_response()
    }
}

/// Result type alias for handlers
pub type ServerResult<T> = Result<T, ServerError>;
