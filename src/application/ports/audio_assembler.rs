use std::path::{Path, PathBuf};

use async_trait::async_trait;

#[async_trait]
pub trait AudioAssembler: Send + Sync {
    /// Concatenates `paths` in order into `output_path`. Missing inputs are skipped.
    async fn combine(&self, paths: &[PathBuf], output_path: &Path) -> Result<(), AssemblyError>;

    /// Deletes every existing path. Failures are logged, never returned.
    async fn cleanup(&self, paths: &[PathBuf]);
}

#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    #[error("audio processing failed: {0}")]
    Processing(String),
}
