use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, Url};
use serde::Serialize;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{ConnectivityStatus, SpeechSynthesizer, SynthesisError};
use crate::presentation::config::SpeechSettings;

const API_KEY_HEADER: &str = "xi-api-key";

pub struct ElevenLabsClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model_id: String,
    voice_settings: VoiceSettings,
}

#[derive(Serialize)]
struct TextToSpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

impl ElevenLabsClient {
    pub fn new(settings: &SpeechSettings) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| SynthesisError::Configuration(format!("http client: {}", e)))?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone().filter(|k| !k.trim().is_empty()),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model_id: settings.model_id.clone(),
            voice_settings: VoiceSettings {
                stability: settings.stability,
                similarity_boost: settings.similarity_boost,
            },
        })
    }

    fn api_key(&self) -> Result<&str, SynthesisError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| SynthesisError::Configuration("ELEVENLABS_API_KEY is not set".to_string()))
    }

    /// `{base}/v1/text-to-speech/{voice_id}` with the voice id encoded as a
    /// single path segment.
    fn synthesis_url(&self, voice_id: &str) -> Result<Url, SynthesisError> {
        if matches!(voice_id.trim(), "" | "." | "..") {
            return Err(SynthesisError::Configuration(format!(
                "invalid voice id '{}'",
                voice_id
            )));
        }

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| SynthesisError::Configuration(format!("base url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| SynthesisError::Configuration("base url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(["v1", "text-to-speech", voice_id]);
        Ok(url)
    }

    async fn stream_to_file(
        response: reqwest::Response,
        output_path: &Path,
    ) -> Result<u64, SynthesisError> {
        let mut file = tokio::fs::File::create(output_path).await?;
        let mut body = response.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk) = body.next().await {
            let bytes =
                chunk.map_err(|e| SynthesisError::Upstream(format!("body: {}", e.without_url())))?;
            file.write_all(&bytes).await?;
            written += bytes.len() as u64;
        }

        file.flush().await?;
        Ok(written)
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsClient {
    async fn synthesize(
        &self,
        line: &str,
        voice_id: &str,
        output_path: &Path,
    ) -> Result<(), SynthesisError> {
        let api_key = self.api_key()?;
        let url = self.synthesis_url(voice_id)?;

        let request_body = TextToSpeechRequest {
            text: line,
            model_id: &self.model_id,
            voice_settings: &self.voice_settings,
        };

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .header(reqwest::header::ACCEPT, "audio/mpeg")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SynthesisError::Upstream(format!("request: {}", e.without_url())))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::Upstream(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        match Self::stream_to_file(response, output_path).await {
            Ok(bytes) => {
                tracing::debug!(
                    voice_id = %voice_id,
                    bytes,
                    path = %output_path.display(),
                    "Chunk synthesized"
                );
                Ok(())
            }
            Err(e) => {
                if let Err(remove_err) = tokio::fs::remove_file(output_path).await {
                    tracing::debug!(error = %remove_err, "No partial chunk to remove");
                }
                Err(e)
            }
        }
    }

    async fn check_connectivity(&self) -> ConnectivityStatus {
        let api_key = match self.api_key() {
            Ok(key) => key,
            Err(e) => {
                return ConnectivityStatus::Error {
                    message: e.to_string(),
                };
            }
        };

        let result = self
            .client
            .get(format!("{}/v1/user", self.base_url))
            .header(API_KEY_HEADER, api_key)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => ConnectivityStatus::Ok,
            Ok(response) => ConnectivityStatus::Error {
                message: format!("HTTP {}", response.status()),
            },
            Err(e) => ConnectivityStatus::Error {
                message: e.without_url().to_string(),
            },
        }
    }
}
