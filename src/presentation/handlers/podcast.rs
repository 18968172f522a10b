use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use super::download_url::download_url;
use super::error::podcast_error_response;
use super::podcast_types::{PodcastRequest, PodcastResponse};
use crate::application::services::AudioDelivery;
use crate::infrastructure::observability::redact_for_log;
use crate::presentation::state::AppState;

#[tracing::instrument(
    skip(state, headers, request),
    fields(style = %request.style, return_base64 = request.return_base64)
)]
pub async fn generate_podcast_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<PodcastRequest>,
) -> impl IntoResponse {
    tracing::debug!(
        transcription = %redact_for_log(&request.transcription),
        "Generating podcast"
    );

    let outcome = match state
        .podcast_service
        .generate_podcast(
            &request.transcription,
            &request.style,
            &request.presenters,
            request.return_base64,
        )
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => return podcast_error_response(&e),
    };

    let (audio_file_url, audio_base64) = match outcome.audio.delivery {
        AudioDelivery::File { file_name } => (
            Some(download_url(&state.settings, &headers, &file_name)),
            None,
        ),
        AudioDelivery::Inline { audio_base64 } => (None, Some(audio_base64)),
    };

    (
        StatusCode::OK,
        Json(PodcastResponse {
            title: outcome.script.title,
            status: "success".to_string(),
            script: outcome.script.lines,
            audio_file_url,
            audio_base64,
        }),
    )
        .into_response()
}
