use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use super::download_url::download_url;
use super::error::podcast_error_response;
use super::podcast_types::{AudioFromScriptRequest, AudioResponse};
use crate::application::services::AudioDelivery;
use crate::domain::Script;
use crate::presentation::state::AppState;

#[tracing::instrument(
    skip(state, headers, request),
    fields(lines = request.script.len(), return_base64 = request.return_base64)
)]
pub async fn generate_audio_from_script_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AudioFromScriptRequest>,
) -> impl IntoResponse {
    let script = Script::new(request.title, request.script);

    let outcome = match state
        .podcast_service
        .audio_from_script(&script, &request.presenters, request.return_base64)
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => return podcast_error_response(&e),
    };

    let response = match outcome.delivery {
        AudioDelivery::File { file_name } => AudioResponse {
            status: "success".to_string(),
            audio_file_url: Some(download_url(&state.settings, &headers, &file_name)),
            audio_base64: None,
        },
        AudioDelivery::Inline { audio_base64 } => AudioResponse {
            status: "success".to_string(),
            audio_file_url: None,
            audio_base64: Some(audio_base64),
        },
    };

    (StatusCode::OK, Json(response)).into_response()
}
