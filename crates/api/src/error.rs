use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::bracket::format::FormatError;

/// Message the admin panel expects when the request is missing its fields.
pub const INVALID_PAYLOAD: &str = "Dados inválidos";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Db(#[from] sqlx::Error),

    #[error("{0}")]
    BadRequest(String),
}

impl From<FormatError> for AppError {
    fn from(err: FormatError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    erro: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "rejected request");
        }
        (
            status,
            Json(ErrorBody {
                erro: self.to_string(),
            }),
        )
            .into_response()
    }
}
