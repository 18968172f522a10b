use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
    pub health_url: String,
}

pub async fn root_handler() -> impl IntoResponse {
    Json(RootResponse {
        message: "Welcome to the podcast generator API".to_string(),
        health_url: "/health".to_string(),
    })
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}

/// Reports whether the speech service answers with the configured key.
pub async fn speech_health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let status = state
        .podcast_service
        .synthesizer()
        .check_connectivity()
        .await;
    (StatusCode::OK, Json(status))
}
