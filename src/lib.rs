//! Tikloader library

pub mod app;
pub mod extractor;
pub mod gui;
pub mod utils;

// Re-export main types for easier use
pub use extractor::{
    extract_quality, parse_response, BackendClient, DownloadResult, SourceResolver, VideoSource,
};
pub use gui::{Message, Screen, ScreenState, TikloaderApp};
pub use utils::{AppSettings, FetchError, TikloaderError};
