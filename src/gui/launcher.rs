//! Hands a source URL to the system browser or download handler

use crate::extractor::VideoSource;
use crate::utils::error::TikloaderError;
use tracing::{info, warn};

/// Open `source` outside the app. Success only means the handler was launched.
pub fn open_source(source: &VideoSource) -> Result<(), TikloaderError> {
    info!("Opening source {}: {}", source.index, source.url);
    open::that(&source.url).map_err(|e| {
        warn!("Failed to open {}: {}", source.url, e);
        TikloaderError::LaunchError {
            url: source.url.clone(),
            source: e,
        }
    })
}
