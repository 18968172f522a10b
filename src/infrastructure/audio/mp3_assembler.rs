use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::audio_decoder::decode_audio;
use crate::application::ports::{AssemblyError, AudioAssembler};
use crate::domain::AUDIO_EXTENSION;

/// Joins MP3 chunks by appending their frame streams.
///
/// MPEG audio is a plain sequence of self-delimiting frames, so once each
/// chunk decodes cleanly the concatenated bytes are a valid MP3 file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mp3Assembler;

impl Mp3Assembler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AudioAssembler for Mp3Assembler {
    async fn combine(&self, paths: &[PathBuf], output_path: &Path) -> Result<(), AssemblyError> {
        let paths = paths.to_vec();
        let output_path = output_path.to_path_buf();

        tokio::task::spawn_blocking(move || combine_files(&paths, &output_path))
            .await
            .map_err(|e| AssemblyError::Processing(format!("assembly task: {}", e)))?
    }

    async fn cleanup(&self, paths: &[PathBuf]) {
        for path in paths {
            match tokio::fs::remove_file(path).await {
                Ok(()) => tracing::debug!(path = %path.display(), "Removed audio file"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to remove audio file")
                }
            }
        }
    }
}

fn combine_files(paths: &[PathBuf], output_path: &Path) -> Result<(), AssemblyError> {
    let mut combined: Vec<u8> = Vec::new();
    let mut appended = 0usize;
    let mut total_secs = 0.0f64;

    for path in paths {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Audio chunk not found, skipping");
            continue;
        }

        let bytes = std::fs::read(path)
            .map_err(|e| AssemblyError::Processing(format!("{}: {}", path.display(), e)))?;

        let decoded = decode_audio(&bytes, AUDIO_EXTENSION)
            .map_err(|e| AssemblyError::Processing(format!("{}: {}", path.display(), e)))?;

        total_secs += decoded.duration_secs().unwrap_or_default();
        combined.extend_from_slice(&bytes);
        appended += 1;
    }

    if appended == 0 {
        tracing::warn!(output = %output_path.display(), "No audio chunks to combine");
    }

    std::fs::write(output_path, &combined)
        .map_err(|e| AssemblyError::Processing(format!("{}: {}", output_path.display(), e)))?;

    tracing::info!(
        chunks = appended,
        bytes = combined.len(),
        duration_secs = total_secs,
        output = %output_path.display(),
        "Audio chunks combined"
    );

    Ok(())
}
