use axum::http::HeaderMap;
use axum::http::header::HOST;
use reqwest::Url;

use crate::presentation::config::Settings;

/// Absolute URL under which `/files/{file_name}` serves a finished podcast.
/// The file name is percent-encoded as one path segment.
pub fn download_url(settings: &Settings, headers: &HeaderMap, file_name: &str) -> String {
    let base = match &settings.server.public_base_url {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => {
            let host = headers
                .get(HOST)
                .and_then(|h| h.to_str().ok())
                .unwrap_or("localhost");
            format!("http://{}", host)
        }
    };

    match files_url(&base, file_name) {
        Some(url) => url.to_string(),
        None => {
            tracing::warn!(base = %base, "Download base is not a valid URL");
            format!("{}/files/{}", base, file_name)
        }
    }
}

fn files_url(base: &str, file_name: &str) -> Option<Url> {
    let mut url = Url::parse(base).ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(["files", file_name]);
    Some(url)
}
