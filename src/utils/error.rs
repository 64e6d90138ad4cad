//! Error handling for Tikloader

use std::sync::Arc;
use thiserror::Error;

/// Failure kinds of a single source lookup.
///
/// Every variant is terminal for the request that produced it; nothing here
/// is retried. The type is `Clone` so it can be carried inside GUI messages,
/// which is why the transport cause sits behind an `Arc`.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Transport(#[source] Arc<reqwest::Error>),

    #[error("Backend returned HTTP {0}")]
    Http(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(Arc::new(err))
    }
}

impl FetchError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        FetchError::MalformedResponse(reason.into())
    }

    /// Message shown to the user. Deliberately generic for backend failures.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::InvalidInput(_) => "Please enter a valid TikTok URL.",
            FetchError::Transport(_) => "Unable to reach the server. Please check your connection.",
            FetchError::Http(_) | FetchError::MalformedResponse(_) => {
                "Could not get the video. Please try again later."
            }
        }
    }
}

/// Application level error type
#[derive(Debug, Error)]
pub enum TikloaderError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("Failed to open {url}: {source}")]
    LaunchError {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display_carries_status() {
        let err = FetchError::Http(503);
        assert_eq!(err.to_string(), "Backend returned HTTP 503");
    }

    #[test]
    fn test_backend_failures_share_generic_message() {
        assert_eq!(
            FetchError::Http(500).user_message(),
            FetchError::malformed("html").user_message()
        );
        assert_ne!(
            FetchError::InvalidInput("x".into()).user_message(),
            FetchError::Http(500).user_message()
        );
    }

    #[test]
    fn test_fetch_error_is_transparent_in_app_error() {
        let err: TikloaderError = FetchError::malformed("not json").into();
        assert_eq!(err.to_string(), "Malformed response: not json");
    }
}
