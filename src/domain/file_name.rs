use regex::Regex;
use std::sync::LazyLock;

const MAX_FILENAME_CHARS: usize = 200;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\-]").unwrap());

/// Turns an arbitrary title into a token safe to embed in a file name.
///
/// Spaces become underscores, anything outside word characters and `-` is
/// dropped, and the result is cut to 200 characters.
pub fn sanitize_filename(title: &str) -> String {
    let underscored = title.trim().replace(' ', "_");
    DISALLOWED
        .replace_all(&underscored, "")
        .chars()
        .take(MAX_FILENAME_CHARS)
        .collect()
}
