use std::io;
use std::path::Path;

use async_trait::async_trait;
use serde::Serialize;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesizes one line of dialogue and writes the audio to `output_path`.
    async fn synthesize(
        &self,
        line: &str,
        voice_id: &str,
        output_path: &Path,
    ) -> Result<(), SynthesisError>;

    /// Best-effort reachability check. Never fails.
    async fn check_connectivity(&self) -> ConnectivityStatus;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ConnectivityStatus {
    Ok,
    Error { message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
