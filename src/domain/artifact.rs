use std::path::{Path, PathBuf};

use super::file_name::sanitize_filename;
use super::podcast_id::PodcastId;

pub const AUDIO_EXTENSION: &str = "mp3";

/// File layout of one podcast run inside the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodcastArtifact {
    pub id: PodcastId,
    pub chunk_paths: Vec<PathBuf>,
    pub final_path: PathBuf,
}

impl PodcastArtifact {
    pub fn new(id: PodcastId, output_dir: &Path, title: &str) -> Self {
        let final_name = format!("{}_{}.{}", sanitize_filename(title), id, AUDIO_EXTENSION);
        Self {
            id,
            chunk_paths: Vec::new(),
            final_path: output_dir.join(final_name),
        }
    }

    /// Chunk files live next to the final file.
    pub fn chunk_path(&self, line_index: usize) -> PathBuf {
        self.final_path.with_file_name(format!(
            "{}_chunk_{}.{}",
            self.id, line_index, AUDIO_EXTENSION
        ))
    }

    pub fn final_file_name(&self) -> String {
        self.final_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
