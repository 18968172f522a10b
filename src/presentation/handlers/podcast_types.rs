use serde::{Deserialize, Serialize};

use crate::domain::{Presenter, PresenterName, ScriptLine};

fn default_style() -> String {
    "Conversacional".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ScriptRequest {
    pub transcription: String,
    #[serde(default = "default_style")]
    pub style: String,
    pub presenters: Vec<PresenterName>,
}

#[derive(Debug, Deserialize)]
pub struct AudioFromScriptRequest {
    pub title: String,
    pub script: Vec<ScriptLine>,
    pub presenters: Vec<Presenter>,
    #[serde(default)]
    pub return_base64: bool,
}

#[derive(Debug, Deserialize)]
pub struct PodcastRequest {
    pub style: String,
    pub presenters: Vec<Presenter>,
    pub transcription: String,
    #[serde(default)]
    pub return_base64: bool,
}

#[derive(Debug, Serialize)]
pub struct AudioResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_base64: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PodcastResponse {
    pub title: String,
    pub status: String,
    pub script: Vec<ScriptLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_base64: Option<String>,
}
