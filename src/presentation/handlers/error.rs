use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::PodcastError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

/// Invalid presenters are the caller's fault; everything else is a 500.
pub fn podcast_error_response(error: &PodcastError) -> Response {
    match error {
        PodcastError::InvalidPresenters(_) => {
            tracing::warn!(error = %error, "Rejected podcast request");
            error_response(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
        _ => {
            tracing::error!(error = %error, "Podcast request failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}
