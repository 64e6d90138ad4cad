//! Data structures for resolved video sources

use crate::extractor::quality::extract_quality;
use serde::{Deserialize, Serialize};

/// One downloadable rendition returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSource {
    /// Ordering hint from the backend. Not guaranteed to be 0-based or contiguous.
    pub index: i64,
    /// Direct media URL, usually carrying a `br=` bitrate parameter
    pub url: String,
}

impl VideoSource {
    pub fn new(index: i64, url: impl Into<String>) -> Self {
        Self {
            index,
            url: url.into(),
        }
    }

    /// Human readable bitrate, e.g. "1 kbps" or "Unknown"
    pub fn quality_label(&self) -> String {
        extract_quality(&self.url)
    }
}

/// Outcome of one successful lookup, in backend order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadResult {
    pub sources: Vec<VideoSource>,
}

impl DownloadResult {
    pub fn new(sources: Vec<VideoSource>) -> Self {
        Self { sources }
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Source at a 1-based display position
    pub fn get_display(&self, position: usize) -> Option<&VideoSource> {
        position.checked_sub(1).and_then(|i| self.sources.get(i))
    }

    /// `(display label, source)` pairs, labels numbered from 1
    pub fn labelled(&self) -> impl Iterator<Item = (String, &VideoSource)> + '_ {
        self.sources.iter().enumerate().map(|(i, source)| {
            (
                format!("Source {} ({})", i + 1, source.quality_label()),
                source,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_position_is_one_based() {
        let result = DownloadResult::new(vec![
            VideoSource::new(7, "https://v/a"),
            VideoSource::new(3, "https://v/b"),
        ]);
        assert!(result.get_display(0).is_none());
        assert_eq!(result.get_display(1).unwrap().url, "https://v/a");
        assert_eq!(result.get_display(2).unwrap().index, 3);
        assert!(result.get_display(3).is_none());
    }

    #[test]
    fn test_labels_use_position_not_backend_index() {
        let result = DownloadResult::new(vec![
            VideoSource::new(5, "https://v/a?br=2048000"),
            VideoSource::new(9, "https://v/b"),
        ]);
        let labels: Vec<String> = result.labelled().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["Source 1 (2048 kbps)", "Source 2 (Unknown)"]);
    }
}
