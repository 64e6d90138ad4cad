pub mod client;
pub mod models;
pub mod parser;
pub mod quality;
pub mod traits;

pub use client::BackendClient;
pub use models::{DownloadResult, VideoSource};
pub use parser::parse_response;
pub use quality::extract_quality;
pub use traits::SourceResolver;
