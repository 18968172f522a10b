use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static VOICE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

pub const PRESENTER_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presenter {
    pub name: String,
    pub voice_id: String,
}

impl Presenter {
    pub fn new(name: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            voice_id: voice_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresenterError {
    #[error("exactly 2 presenters are required, got {0}")]
    WrongCount(usize),
    #[error("presenter names must not be empty")]
    EmptyName,
    #[error("presenter name '{0}' is used more than once")]
    DuplicateName(String),
    #[error("voice id '{0}' may only contain letters, digits, '_' and '-'")]
    InvalidVoiceId(String),
}

/// Checks the two-presenter rule: exactly two, non-empty, distinct names.
pub fn validate_presenter_names<'a, I>(names: I) -> Result<(), PresenterError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(PresenterError::EmptyName);
        }
        if !seen.insert(name) {
            return Err(PresenterError::DuplicateName(name.to_string()));
        }
    }

    if seen.len() != PRESENTER_COUNT {
        return Err(PresenterError::WrongCount(seen.len()));
    }

    Ok(())
}

/// Speaker name to voice id lookup for one podcast run.
#[derive(Debug, Clone)]
pub struct VoiceMap(HashMap<String, String>);

impl VoiceMap {
    pub fn from_presenters(presenters: &[Presenter]) -> Result<Self, PresenterError> {
        validate_presenter_names(presenters.iter().map(|p| p.name.as_str()))?;
        if let Some(bad) = presenters.iter().find(|p| !VOICE_ID.is_match(&p.voice_id)) {
            return Err(PresenterError::InvalidVoiceId(bad.voice_id.clone()));
        }
        Ok(Self(
            presenters
                .iter()
                .map(|p| (p.name.clone(), p.voice_id.clone()))
                .collect(),
        ))
    }

    /// Case-sensitive lookup.
    pub fn voice_for(&self, speaker: &str) -> Option<&str> {
        self.0.get(speaker).map(String::as_str)
    }
}
