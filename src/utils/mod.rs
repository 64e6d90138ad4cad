//! Utility modules for error handling, configuration and input checks

pub mod config;
pub mod error;
pub mod validation;

// Re-export for convenience
pub use config::AppSettings;
pub use error::{FetchError, TikloaderError};
pub use validation::{is_tiktok_link, validate_input_url};
