use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use podcastify::application::ports::{
    AssemblyError, AudioAssembler, ConnectivityStatus, ScriptGenerator, ScriptGeneratorError,
    SpeechSynthesizer, SynthesisError,
};
use podcastify::domain::{Script, ScriptLine};

pub fn ana_luis_script() -> Script {
    Script::new(
        "IA hoy",
        vec![
            ScriptLine::new("Ana", "Hoy hablamos de IA."),
            ScriptLine::new("Luis", "Un tema fascinante."),
            ScriptLine::new("Ana", "Empecemos."),
        ],
    )
}

pub enum ScriptBehaviour {
    Returns(Script),
    FailsUpstream(String),
}

pub struct FakeScriptGenerator {
    behaviour: ScriptBehaviour,
    pub calls: Mutex<Vec<(String, String, Vec<String>)>>,
}

impl FakeScriptGenerator {
    pub fn returning(script: Script) -> Self {
        Self {
            behaviour: ScriptBehaviour::Returns(script),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            behaviour: ScriptBehaviour::FailsUpstream(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ScriptGenerator for FakeScriptGenerator {
    async fn generate_script(
        &self,
        transcription: &str,
        style: &str,
        presenter_names: &[&str],
    ) -> Result<Script, ScriptGeneratorError> {
        self.calls.lock().unwrap().push((
            transcription.to_string(),
            style.to_string(),
            presenter_names.iter().map(|n| n.to_string()).collect(),
        ));
        match &self.behaviour {
            ScriptBehaviour::Returns(script) => Ok(script.clone()),
            ScriptBehaviour::FailsUpstream(message) => {
                Err(ScriptGeneratorError::Upstream(message.clone()))
            }
        }
    }
}

/// Writes `voice_id:line` into each chunk so tests can check order and voice.
#[derive(Default)]
pub struct FakeSynthesizer {
    pub fail_on_line: Option<String>,
    pub slow_line: Option<String>,
    pub written: Mutex<Vec<PathBuf>>,
}

impl FakeSynthesizer {
    pub fn failing_on(line: &str) -> Self {
        Self {
            fail_on_line: Some(line.to_string()),
            ..Default::default()
        }
    }

    pub fn slow_on(line: &str) -> Self {
        Self {
            slow_line: Some(line.to_string()),
            ..Default::default()
        }
    }

    pub fn written(&self) -> Vec<PathBuf> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for FakeSynthesizer {
    async fn synthesize(
        &self,
        line: &str,
        voice_id: &str,
        output_path: &Path,
    ) -> Result<(), SynthesisError> {
        if self.slow_line.as_deref() == Some(line) {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        if self.fail_on_line.as_deref() == Some(line) {
            return Err(SynthesisError::Upstream("HTTP 500: boom".to_string()));
        }
        tokio::fs::write(output_path, format!("{}:{}|", voice_id, line)).await?;
        self.written.lock().unwrap().push(output_path.to_path_buf());
        Ok(())
    }

    async fn check_connectivity(&self) -> ConnectivityStatus {
        ConnectivityStatus::Ok
    }
}

/// Byte-concatenating assembler that remembers which inputs existed.
#[derive(Default)]
pub struct FakeAssembler {
    pub seen: Mutex<Vec<PathBuf>>,
}

#[async_trait::async_trait]
impl AudioAssembler for FakeAssembler {
    async fn combine(&self, paths: &[PathBuf], output_path: &Path) -> Result<(), AssemblyError> {
        let mut combined = Vec::new();
        for path in paths {
            if let Ok(bytes) = tokio::fs::read(path).await {
                combined.extend_from_slice(&bytes);
                self.seen.lock().unwrap().push(path.clone());
            }
        }
        tokio::fs::write(output_path, combined)
            .await
            .map_err(|e| AssemblyError::Processing(e.to_string()))
    }

    async fn cleanup(&self, paths: &[PathBuf]) {
        for path in paths {
            let _ = tokio::fs::remove_file(path).await;
        }
    }
}

pub fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
