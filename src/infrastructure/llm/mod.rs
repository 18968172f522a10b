mod gemini_script_client;

pub use gemini_script_client::{GeminiScriptClient, parse_script_payload};
