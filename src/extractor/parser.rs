//! Backend response parsing
//!
//! The backend answers with `{"data": {"sources": [{"index", "url"}, ...]}}`.
//! Missing `data` or `sources` is a valid empty answer, and bad elements are
//! dropped one by one instead of failing the whole response. Only a body that
//! is not a JSON object at all is rejected.

use crate::extractor::models::{DownloadResult, VideoSource};
use crate::utils::error::FetchError;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Prefixes of HTML documents returned by misconfigured proxies, lowercase.
const HTML_SIGNATURES: &[&str] = &["<!doctype", "<html"];

/// How much of an HTML body to log.
const HTML_LOG_PREVIEW: usize = 100;

/// Parse a raw response body into an ordered list of sources.
pub fn parse_response(body: &str) -> Result<DownloadResult, FetchError> {
    let trimmed = body.trim_start_matches('\u{feff}').trim_start();
    if trimmed.is_empty() {
        return Err(FetchError::malformed("empty response body"));
    }

    if looks_like_html(trimmed) {
        let preview: String = trimmed.chars().take(HTML_LOG_PREVIEW).collect();
        debug!("HTML response: {}", preview);
        return Err(FetchError::malformed("response is HTML instead of JSON"));
    }

    let root: Value = serde_json::from_str(trimmed)
        .map_err(|e| FetchError::malformed(format!("invalid JSON: {}", e)))?;

    let root = root
        .as_object()
        .ok_or_else(|| FetchError::malformed("top-level JSON value is not an object"))?;

    Ok(DownloadResult::new(extract_sources(root)))
}

fn looks_like_html(body: &str) -> bool {
    let head: String = body.chars().take(16).collect::<String>().to_ascii_lowercase();
    HTML_SIGNATURES.iter().any(|sig| head.starts_with(sig))
}

fn extract_sources(root: &Map<String, Value>) -> Vec<VideoSource> {
    let Some(data) = root.get("data").and_then(Value::as_object) else {
        debug!("Response has no data object");
        return Vec::new();
    };

    let Some(entries) = data.get("sources").and_then(Value::as_array) else {
        debug!("Response data has no sources array");
        return Vec::new();
    };

    let mut sources = Vec::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        let Some(entry) = entry.as_object() else {
            warn!("Skipping source #{}: not an object", position);
            continue;
        };

        match read_url(entry) {
            Some(url) => sources.push(VideoSource::new(read_index(entry), url)),
            None => debug!("Skipping source #{}: missing or empty url", position),
        }
    }

    sources
}

/// `index` as an integer. Floats truncate, numeric strings parse, anything else is 0.
fn read_index(entry: &Map<String, Value>) -> i64 {
    match entry.get("index") {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

fn read_url(entry: &Map<String, Value>) -> Option<&str> {
    entry
        .get("url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
}
