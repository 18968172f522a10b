use async_trait::async_trait;

use crate::domain::Script;

#[async_trait]
pub trait ScriptGenerator: Send + Sync {
    /// Turns a transcription into a dialogue between the two named presenters.
    async fn generate_script(
        &self,
        transcription: &str,
        style: &str,
        presenter_names: &[&str],
    ) -> Result<Script, ScriptGeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptGeneratorError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("invalid response format: {0}")]
    ResponseFormat(String),
}
