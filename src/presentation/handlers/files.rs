use std::io;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

use super::error::error_response;
use crate::presentation::state::AppState;

const FILE_NOT_FOUND: &str = "File not found.";

/// Serves a finished podcast from the output directory.
#[tracing::instrument(skip(state))]
pub async fn file_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    if !is_plain_file_name(&filename) {
        tracing::warn!("Rejected file name outside the output directory");
        return error_response(StatusCode::NOT_FOUND, FILE_NOT_FOUND);
    }

    let path = state.podcast_service.output_dir().join(&filename);

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            tracing::debug!(bytes = bytes.len(), "Serving audio file");
            (
                [
                    (CONTENT_TYPE, "audio/mpeg".to_string()),
                    (
                        CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            error_response(StatusCode::NOT_FOUND, FILE_NOT_FOUND)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read audio file");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read file: {}", e),
            )
        }
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '"'])
        && !name.contains("..")
        && !name.chars().any(char::is_control)
}
