use crate::extractor::models::DownloadResult;
use crate::utils::error::FetchError;
use async_trait::async_trait;

/// Turns a TikTok page URL into direct media sources.
///
/// Implementations perform at most one attempt per call and never retry.
#[async_trait]
pub trait SourceResolver: Send + Sync {
    /// Returns a unique identifier for this resolver (e.g., "http-backend")
    fn id(&self) -> &'static str;

    /// Resolve `tiktok_url`, which the caller has already validated as an
    /// absolute http(s) URL.
    async fn fetch_sources(&self, tiktok_url: &str) -> Result<DownloadResult, FetchError>;
}
