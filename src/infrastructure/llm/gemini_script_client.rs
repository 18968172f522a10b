use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{ScriptGenerator, ScriptGeneratorError};
use crate::domain::{Script, ScriptLine};
use crate::presentation::config::ScriptGeneratorSettings;

pub struct GeminiScriptClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiScriptClient {
    pub fn new(settings: &ScriptGeneratorSettings) -> Result<Self, ScriptGeneratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| {
                ScriptGeneratorError::Configuration(format!("http client: {}", e))
            })?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone().filter(|k| !k.trim().is_empty()),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl ScriptGenerator for GeminiScriptClient {
    async fn generate_script(
        &self,
        transcription: &str,
        style: &str,
        presenter_names: &[&str],
    ) -> Result<Script, ScriptGeneratorError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ScriptGeneratorError::Configuration("GEMINI_API_KEY is not set".to_string())
        })?;

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(transcription, style, presenter_names),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        tracing::debug!(model = %self.model, "Requesting script from Gemini");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ScriptGeneratorError::Upstream(format!("request: {}", e.without_url())))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ScriptGeneratorError::Upstream(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| {
                ScriptGeneratorError::ResponseFormat(format!("envelope: {}", e.without_url()))
            })?;

        let text = envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| {
                ScriptGeneratorError::ResponseFormat("reply contains no candidate text".to_string())
            })?;

        parse_script_payload(&text)
    }
}

fn build_prompt(transcription: &str, style: &str, presenter_names: &[&str]) -> String {
    let names = presenter_names.join(" and ");
    let first = presenter_names.first().copied().unwrap_or_default();
    let second = presenter_names.get(1).copied().unwrap_or_default();

    format!(
        r#"Act as an expert podcast scriptwriter.
Turn the transcription below into a lively conversational script for a podcast.
The script is for two presenters: {names}.
The podcast style is: {style}.
Write the dialogue in the same language as the transcription.

Strict output rules:
1. The output MUST be a single valid JSON object.
2. The object has exactly two keys: "title" and "script".
3. "title" is a short string naming the episode.
4. "script" is a list of objects, each with the keys "speaker" and "line".
5. "speaker" must be exactly one of the presenter names.
6. "line" is what that presenter says.
7. Do not write any text, explanation or markdown outside the JSON object.

Example output:
{{
  "title": "An example episode",
  "script": [
    {{ "speaker": "{first}", "line": "Welcome to the show." }},
    {{ "speaker": "{second}", "line": "Today we explore a fascinating topic." }}
  ]
}}

Original transcription:
---
{transcription}
---
"#
    )
}

/// Parses the model reply into a [`Script`].
///
/// The reply must be a JSON object with a string `title` and a `script` array
/// of `{speaker, line}` objects. A surrounding markdown code fence is tolerated.
pub fn parse_script_payload(text: &str) -> Result<Script, ScriptGeneratorError> {
    let value: Value = serde_json::from_str(strip_code_fence(text)).map_err(|e| {
        ScriptGeneratorError::ResponseFormat(format!("reply is not valid JSON: {}", e))
    })?;

    let object = value.as_object().ok_or_else(|| {
        ScriptGeneratorError::ResponseFormat("reply is not a JSON object".to_string())
    })?;

    let title = object
        .get("title")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ScriptGeneratorError::ResponseFormat("missing string field `title`".to_string())
        })?;

    let entries = object
        .get("script")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ScriptGeneratorError::ResponseFormat("missing list field `script`".to_string())
        })?;

    let lines = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            ScriptLine::deserialize(entry).map_err(|e| {
                ScriptGeneratorError::ResponseFormat(format!("script[{}]: {}", index, e))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Script::new(title, lines))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.strip_prefix("json").unwrap_or(rest);
    body.strip_suffix("```").unwrap_or(body).trim()
}
