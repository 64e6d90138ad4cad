//! Input checks applied before a URL is handed to the backend

use crate::utils::error::FetchError;

/// Marker a clipboard string must contain before it replaces the input.
pub const TIKTOK_HOST_MARKER: &str = "tiktok.com";

/// Trim user input and require an absolute http(s) URL.
///
/// Returns the trimmed URL that should be sent to the backend.
pub fn validate_input_url(input: &str) -> Result<&str, FetchError> {
    let trimmed = input.trim();
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        Ok(trimmed)
    } else {
        Err(FetchError::InvalidInput(trimmed.to_string()))
    }
}

/// Whether a clipboard string looks like a TikTok link.
pub fn is_tiktok_link(text: &str) -> bool {
    text.contains(TIKTOK_HOST_MARKER)
}
