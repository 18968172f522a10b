mod helpers;

use axum::http::{Method, StatusCode};
use serde_json::json;

use helpers::stub_server::{StubServer, unreachable_base_url};
use podcastify::application::ports::{ScriptGenerator, ScriptGeneratorError};
use podcastify::infrastructure::llm::GeminiScriptClient;
use podcastify::presentation::config::ScriptGeneratorSettings;

fn settings(base_url: &str, api_key: Option<&str>) -> ScriptGeneratorSettings {
    ScriptGeneratorSettings {
        api_key: api_key.map(String::from),
        base_url: base_url.to_string(),
        model: "gemini-test".to_string(),
        timeout_secs: 5,
    }
}

fn candidate_reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] }
        }]
    })
}

#[tokio::test]
async fn given_well_formed_reply_when_generating_then_returns_title_and_lines() {
    let inner = json!({
        "title": "La IA hoy",
        "script": [
            { "speaker": "Ana", "line": "Hoy hablamos de IA." },
            { "speaker": "Luis", "line": "Empecemos." }
        ]
    });
    let stub = StubServer::json(StatusCode::OK, candidate_reply(&inner.to_string())).await;
    let client = GeminiScriptClient::new(&settings(&stub.base_url, Some("test-key"))).unwrap();

    let script = client
        .generate_script("Hoy hablamos de IA.", "Educativo", &["Ana", "Luis"])
        .await
        .unwrap();

    assert_eq!(script.title, "La IA hoy");
    assert_eq!(script.lines.len(), 2);
    assert!(
        script
            .lines
            .iter()
            .all(|l| l.speaker == "Ana" || l.speaker == "Luis")
    );
}

#[tokio::test]
async fn given_request_when_generating_then_sends_key_model_and_json_mime_type() {
    let inner = json!({ "title": "t", "script": [] });
    let stub = StubServer::json(StatusCode::OK, candidate_reply(&inner.to_string())).await;
    let client = GeminiScriptClient::new(&settings(&stub.base_url, Some("test-key"))).unwrap();

    client
        .generate_script("Hoy hablamos de IA.", "Educativo", &["Ana", "Luis"])
        .await
        .unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(
        request.uri.path(),
        "/v1beta/models/gemini-test:generateContent"
    );
    assert_eq!(request.uri.query(), Some("key=test-key"));

    let body = request.json();
    assert_eq!(
        body["generationConfig"]["response_mime_type"],
        "application/json"
    );
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Ana and Luis"));
    assert!(prompt.contains("Educativo"));
    assert!(prompt.contains("Hoy hablamos de IA."));
}

#[tokio::test]
async fn given_reply_without_script_key_when_generating_then_response_format_error() {
    let inner = json!({ "title": "t" });
    let stub = StubServer::json(StatusCode::OK, candidate_reply(&inner.to_string())).await;
    let client = GeminiScriptClient::new(&settings(&stub.base_url, Some("k"))).unwrap();

    let result = client.generate_script("x", "y", &["Ana", "Luis"]).await;

    assert!(matches!(result, Err(ScriptGeneratorError::ResponseFormat(_))));
}

#[tokio::test]
async fn given_non_json_candidate_text_when_generating_then_response_format_error() {
    let stub = StubServer::json(StatusCode::OK, candidate_reply("Sure! Here is your script")).await;
    let client = GeminiScriptClient::new(&settings(&stub.base_url, Some("k"))).unwrap();

    let result = client.generate_script("x", "y", &["Ana", "Luis"]).await;

    assert!(matches!(result, Err(ScriptGeneratorError::ResponseFormat(_))));
}

#[tokio::test]
async fn given_empty_candidates_when_generating_then_response_format_error() {
    let stub = StubServer::json(StatusCode::OK, json!({ "candidates": [] })).await;
    let client = GeminiScriptClient::new(&settings(&stub.base_url, Some("k"))).unwrap();

    let result = client.generate_script("x", "y", &["Ana", "Luis"]).await;

    assert!(matches!(result, Err(ScriptGeneratorError::ResponseFormat(_))));
}

#[tokio::test]
async fn given_non_success_status_when_generating_then_upstream_error_with_body() {
    let stub = StubServer::json(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "message": "quota exceeded" } }),
    )
    .await;
    let client = GeminiScriptClient::new(&settings(&stub.base_url, Some("k"))).unwrap();

    let result = client.generate_script("x", "y", &["Ana", "Luis"]).await;

    match result {
        Err(ScriptGeneratorError::Upstream(message)) => {
            assert!(message.contains("429"));
            assert!(message.contains("quota exceeded"));
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn given_unreachable_service_when_generating_then_upstream_error() {
    let base_url = unreachable_base_url().await;
    let client = GeminiScriptClient::new(&settings(&base_url, Some("SUPERSECRET123"))).unwrap();

    let result = client.generate_script("x", "y", &["Ana", "Luis"]).await;

    match result {
        Err(ScriptGeneratorError::Upstream(message)) => {
            assert!(!message.contains("SUPERSECRET123"), "key leaked: {}", message);
            assert!(!message.contains("key="), "query leaked: {}", message);
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn given_non_json_envelope_when_generating_then_error_does_not_expose_key() {
    let stub = StubServer::start(StatusCode::OK, "application/json", "not json").await;
    let client = GeminiScriptClient::new(&settings(&stub.base_url, Some("SUPERSECRET123"))).unwrap();

    let result = client.generate_script("x", "y", &["Ana", "Luis"]).await;

    match result {
        Err(ScriptGeneratorError::ResponseFormat(message)) => {
            assert!(!message.contains("SUPERSECRET123"), "key leaked: {}", message);
        }
        other => panic!("expected response format error, got {:?}", other),
    }
}

#[tokio::test]
async fn given_no_api_key_when_generating_then_configuration_error_without_request() {
    let stub = StubServer::json(StatusCode::OK, json!({})).await;
    let client = GeminiScriptClient::new(&settings(&stub.base_url, None)).unwrap();

    let result = client.generate_script("x", "y", &["Ana", "Luis"]).await;

    assert!(matches!(result, Err(ScriptGeneratorError::Configuration(_))));
    assert!(stub.requests().is_empty());
}
