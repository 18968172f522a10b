use std::path::PathBuf;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures::{StreamExt, TryStreamExt, stream};

use super::transient_files::TransientFiles;
use crate::application::ports::{
    AssemblyError, AudioAssembler, ScriptGenerator, ScriptGeneratorError, SpeechSynthesizer,
    SynthesisError,
};
use crate::domain::{
    PodcastArtifact, PodcastId, Presenter, PresenterError, Script, VoiceMap,
    validate_presenter_names,
};

pub struct PodcastService {
    script_generator: Arc<dyn ScriptGenerator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    assembler: Arc<dyn AudioAssembler>,
    output_dir: PathBuf,
    synthesis_concurrency: usize,
}

/// How the finished audio is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioDelivery {
    /// The file stays in the output directory and is served by name.
    File { file_name: String },
    /// The file was read, base64-encoded and deleted.
    Inline { audio_base64: String },
}

#[derive(Debug, Clone)]
pub struct AudioOutcome {
    pub podcast_id: PodcastId,
    pub chunk_count: usize,
    pub delivery: AudioDelivery,
}

#[derive(Debug, Clone)]
pub struct PodcastOutcome {
    pub script: Script,
    pub audio: AudioOutcome,
}

struct ChunkJob<'a> {
    line_index: usize,
    speaker: &'a str,
    text: &'a str,
    voice_id: &'a str,
    path: PathBuf,
}

impl PodcastService {
    pub fn new(
        script_generator: Arc<dyn ScriptGenerator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        assembler: Arc<dyn AudioAssembler>,
        output_dir: PathBuf,
        synthesis_concurrency: usize,
    ) -> Self {
        Self {
            script_generator,
            synthesizer,
            assembler,
            output_dir,
            synthesis_concurrency: synthesis_concurrency.max(1),
        }
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    pub fn synthesizer(&self) -> &Arc<dyn SpeechSynthesizer> {
        &self.synthesizer
    }

    pub async fn generate_script(
        &self,
        transcription: &str,
        style: &str,
        presenter_names: &[&str],
    ) -> Result<Script, PodcastError> {
        validate_presenter_names(presenter_names.iter().copied())?;

        let script = self
            .script_generator
            .generate_script(transcription, style, presenter_names)
            .await?;

        tracing::info!(
            title = %script.title,
            lines = script.lines.len(),
            "Script generated"
        );

        Ok(script)
    }

    pub async fn audio_from_script(
        &self,
        script: &Script,
        presenters: &[Presenter],
        return_base64: bool,
    ) -> Result<AudioOutcome, PodcastError> {
        let voices = VoiceMap::from_presenters(presenters)?;
        self.render_audio(script, &voices, return_base64).await
    }

    pub async fn generate_podcast(
        &self,
        transcription: &str,
        style: &str,
        presenters: &[Presenter],
        return_base64: bool,
    ) -> Result<PodcastOutcome, PodcastError> {
        let voices = VoiceMap::from_presenters(presenters)?;
        let names: Vec<&str> = presenters.iter().map(|p| p.name.as_str()).collect();

        let script = self.generate_script(transcription, style, &names).await?;
        let audio = self.render_audio(&script, &voices, return_base64).await?;

        Ok(PodcastOutcome { script, audio })
    }

    #[tracing::instrument(skip_all, fields(podcast_id))]
    async fn render_audio(
        &self,
        script: &Script,
        voices: &VoiceMap,
        return_base64: bool,
    ) -> Result<AudioOutcome, PodcastError> {
        let mut artifact = PodcastArtifact::new(PodcastId::new(), &self.output_dir, &script.title);
        tracing::Span::current().record("podcast_id", tracing::field::display(artifact.id));

        let jobs = plan_chunks(script, voices, &artifact);
        artifact.chunk_paths = jobs.iter().map(|job| job.path.clone()).collect();

        let mut transient = TransientFiles::new(artifact.chunk_paths.clone());
        transient.track(artifact.final_path.clone());

        tracing::debug!(
            lines = script.lines.len(),
            chunks = jobs.len(),
            concurrency = self.synthesis_concurrency,
            "Synthesizing chunks"
        );

        let pending: Vec<_> = jobs.iter().map(|job| self.synthesize_chunk(job)).collect();
        stream::iter(pending)
            .buffered(self.synthesis_concurrency)
            .try_collect::<Vec<()>>()
            .await?;

        self.assembler
            .combine(&artifact.chunk_paths, &artifact.final_path)
            .await?;
        self.assembler.cleanup(&artifact.chunk_paths).await;

        let delivery = if return_base64 {
            let bytes = tokio::fs::read(&artifact.final_path).await?;
            let audio_base64 = STANDARD.encode(&bytes);
            self.assembler
                .cleanup(std::slice::from_ref(&artifact.final_path))
                .await;
            tracing::info!(bytes = bytes.len(), "Podcast audio encoded inline");
            AudioDelivery::Inline { audio_base64 }
        } else {
            transient.keep(&artifact.final_path);
            let file_name = artifact.final_file_name();
            tracing::info!(file_name = %file_name, "Podcast audio written");
            AudioDelivery::File { file_name }
        };

        Ok(AudioOutcome {
            podcast_id: artifact.id,
            chunk_count: artifact.chunk_paths.len(),
            delivery,
        })
    }

    async fn synthesize_chunk(&self, job: &ChunkJob<'_>) -> Result<(), SynthesisError> {
        tracing::debug!(
            line_index = job.line_index,
            speaker = %job.speaker,
            "Synthesizing line"
        );
        self.synthesizer
            .synthesize(job.text, job.voice_id, &job.path)
            .await
    }
}

fn plan_chunks<'a>(
    script: &'a Script,
    voices: &'a VoiceMap,
    artifact: &PodcastArtifact,
) -> Vec<ChunkJob<'a>> {
    script
        .lines
        .iter()
        .enumerate()
        .filter_map(|(line_index, line)| {
            if line.is_blank() {
                tracing::debug!(line_index, "Skipping blank script line");
                return None;
            }

            let Some(voice_id) = voices.voice_for(&line.speaker) else {
                tracing::warn!(
                    line_index,
                    speaker = %line.speaker,
                    "Speaker not found in presenters, skipping line"
                );
                return None;
            };

            Some(ChunkJob {
                line_index,
                speaker: &line.speaker,
                text: &line.line,
                voice_id,
                path: artifact.chunk_path(line_index),
            })
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum PodcastError {
    #[error("invalid presenters: {0}")]
    InvalidPresenters(#[from] PresenterError),
    #[error("script generation failed: {0}")]
    Script(#[from] ScriptGeneratorError),
    #[error("speech synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("audio assembly failed: {0}")]
    Assembly(#[from] AssemblyError),
    #[error("failed to read generated audio: {0}")]
    Io(#[from] std::io::Error),
}
