use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptLine {
    pub speaker: String,
    pub line: String,
}

impl ScriptLine {
    pub fn new(speaker: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            line: line.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.speaker.trim().is_empty() || self.line.trim().is_empty()
    }
}

/// A generated dialogue. Line order is playback order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub title: String,
    #[serde(rename = "script")]
    pub lines: Vec<ScriptLine>,
}

impl Script {
    pub fn new(title: impl Into<String>, lines: Vec<ScriptLine>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }
}
