use std::path::PathBuf;

use config::{Config, ConfigBuilder, ConfigError, File, builder::DefaultState};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub script_generator: ScriptGeneratorSettings,
    pub speech: SpeechSettings,
    pub audio: AudioSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Prefix for download URLs. Falls back to the request's `Host` header.
    pub public_base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptGeneratorSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model_id: String,
    pub stability: f32,
    pub similarity_boost: f32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub output_dir: PathBuf,
    /// Synthesis calls in flight per request. 1 keeps lines strictly sequential.
    pub synthesis_concurrency: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("invalid setting `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl Settings {
    /// Layers defaults, `appsettings.{environment}.toml`, `APP__*` variables
    /// and the well-known credential variables, in that order.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let builder = Self::defaults()?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("script_generator.api_key", non_empty_env("GEMINI_API_KEY"))?
            .set_override_option("speech.api_key", non_empty_env("ELEVENLABS_API_KEY"))?
            .set_override_option("speech.model_id", non_empty_env("ELEVENLABS_MODEL_ID"))?;

        Self::from_builder(builder)
    }

    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default(
                "script_generator.base_url",
                "https://generativelanguage.googleapis.com",
            )?
            .set_default("script_generator.model", "gemini-1.5-flash")?
            .set_default("script_generator.timeout_secs", 120)?
            .set_default("speech.base_url", "https://api.elevenlabs.io")?
            .set_default("speech.model_id", "eleven_multilingual_v2")?
            .set_default("speech.stability", 0.5)?
            .set_default("speech.similarity_boost", 0.75)?
            .set_default("speech.timeout_secs", 60)?
            .set_default("audio.output_dir", "files")?
            .set_default("audio.synthesis_concurrency", 1)?
            .set_default("logging.json", false)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.server.port == 0 {
            return Err(invalid("server.port", "must be non-zero"));
        }
        if self.script_generator.model.trim().is_empty() {
            return Err(invalid("script_generator.model", "must not be empty"));
        }
        if self.script_generator.timeout_secs == 0 {
            return Err(invalid("script_generator.timeout_secs", "must be non-zero"));
        }
        if self.speech.model_id.trim().is_empty() {
            return Err(invalid("speech.model_id", "must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.speech.stability) {
            return Err(invalid("speech.stability", "must be within 0.0..=1.0"));
        }
        if !(0.0..=1.0).contains(&self.speech.similarity_boost) {
            return Err(invalid("speech.similarity_boost", "must be within 0.0..=1.0"));
        }
        if self.speech.timeout_secs == 0 {
            return Err(invalid("speech.timeout_secs", "must be non-zero"));
        }
        if self.audio.output_dir.as_os_str().is_empty() {
            return Err(invalid("audio.output_dir", "must not be empty"));
        }
        if self.audio.synthesis_concurrency == 0 {
            return Err(invalid("audio.synthesis_concurrency", "must be at least 1"));
        }
        Ok(())
    }

    /// Names of credentials that are not configured.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.script_generator.api_key.is_none() {
            missing.push("GEMINI_API_KEY");
        }
        if self.speech.api_key.is_none() {
            missing.push("ELEVENLABS_API_KEY");
        }
        missing
    }
}

fn invalid(key: &'static str, reason: &str) -> SettingsError {
    SettingsError::Invalid {
        key,
        reason: reason.to_string(),
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
