//! Clipboard functionality

use crate::utils::error::TikloaderError;
use crate::utils::validation::is_tiktok_link;
use arboard::Clipboard;

/// Get clipboard content
pub fn get_clipboard_content() -> Result<String, TikloaderError> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| TikloaderError::ClipboardError(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .get_text()
        .map_err(|e| TikloaderError::ClipboardError(format!("Failed to read clipboard: {}", e)))
}

/// Clipboard text if it holds a TikTok link
pub fn get_tiktok_link() -> Result<Option<String>, TikloaderError> {
    let content = get_clipboard_content()?;
    let content = content.trim();
    Ok(is_tiktok_link(content).then(|| content.to_string()))
}
