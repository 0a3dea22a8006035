//! Parsing of the extraction stage's completion into structured issues.
//!
//! The provider constrains the response to JSON, but models still wrap
//! payloads in markdown fences or prose from time to time, so parsing
//! tries a few candidate slices before giving up with an explicit error.

use thiserror::Error;

use crate::models::{Issue, IssueList};

/// Maximum length of response text to include in parse error messages.
const PARSE_ERROR_PREVIEW_LEN: usize = 2000;

/// Errors from issue extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("could not parse extraction response as issues JSON. Response: {0}")]
    Malformed(String),
}

/// Parse the raw extraction completion into a list of issues.
///
/// Accepts the documented `{"issues": [...]}` wrapper as well as a bare
/// array. An empty response means no actionable issues.
pub fn parse_issue_list(response: &str) -> Result<Vec<Issue>, ExtractError> {
    let trimmed = response.trim();

    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    for candidate in extract_json_candidates(trimmed) {
        if let Ok(wrapper) = serde_json::from_str::<IssueList>(&candidate) {
            return Ok(wrapper.issues);
        }
        if let Ok(issues) = serde_json::from_str::<Vec<Issue>>(&candidate) {
            return Ok(issues);
        }
    }

    Err(ExtractError::Malformed(preview(response).to_string()))
}

/// Truncate a response for error messages, respecting char boundaries.
fn preview(response: &str) -> &str {
    let mut end = response.len().min(PARSE_ERROR_PREVIEW_LEN);
    while !response.is_char_boundary(end) {
        end -= 1;
    }
    &response[..end]
}

/// Regex for extracting content inside markdown code fences.
///
/// The closing ``` must appear at the start of a line (`\n````) to avoid
/// matching triple-backticks embedded inside JSON string values.
static FENCE_RE: std::sync::LazyLock<regex::Regex> =
    std::sync::LazyLock::new(|| regex::Regex::new(r"(?s)```(?:json)?\s*\n(.*?)\n```").unwrap());

/// Extract candidate JSON strings from a response.
///
/// Returns the trimmed response itself, the outermost `{..}` and `[..]`
/// slices, and any content inside markdown code fences.
fn extract_json_candidates(text: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    // First candidate: the raw text.
    candidates.push(text.to_string());

    // Outermost-delimiter slices — the most robust strategy when the
    // response mixes prose or nested fences with the JSON payload.
    for (open, close) in [('{', '}'), ('[', ']')] {
        if let (Some(start), Some(end)) = (text.find(open), text.rfind(close)) {
            if start < end {
                candidates.push(text[start..=end].to_string());
            }
        }
    }

    // Content from markdown code fences.
    for cap in FENCE_RE.captures_iter(text) {
        if let Some(inner) = cap.get(1) {
            let inner_trimmed = inner.as_str().trim();
            if !inner_trimmed.is_empty() {
                candidates.push(inner_trimmed.to_string());
            }
        }
    }

    candidates
}
