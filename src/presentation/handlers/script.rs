use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::error::podcast_error_response;
use super::podcast_types::ScriptRequest;
use crate::infrastructure::observability::redact_for_log;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state, request), fields(style = %request.style))]
pub async fn generate_script_handler(
    State(state): State<AppState>,
    Json(request): Json<ScriptRequest>,
) -> impl IntoResponse {
    tracing::debug!(
        transcription = %redact_for_log(&request.transcription),
        "Generating script"
    );

    let names: Vec<&str> = request.presenters.iter().map(|p| p.name.as_str()).collect();

    match state
        .podcast_service
        .generate_script(&request.transcription, &request.style, &names)
        .await
    {
        Ok(script) => (StatusCode::OK, Json(script)).into_response(),
        Err(e) => podcast_error_response(&e),
    }
}
