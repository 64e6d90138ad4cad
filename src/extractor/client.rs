//! HTTP client for the source resolver backend
//!
//! One POST per lookup with a `{"url": ...}` body. The response is handed to
//! the parser unchanged.

use crate::extractor::models::DownloadResult;
use crate::extractor::parser::parse_response;
use crate::extractor::traits::SourceResolver;
use crate::utils::config::AppSettings;
use crate::utils::error::{FetchError, TikloaderError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, error, info};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Backend-backed source resolver
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    endpoint: String,
}

impl BackendClient {
    /// Build a client from settings. The timeout is applied only if configured.
    pub fn new(settings: &AppSettings) -> Result<Self, TikloaderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self::with_client(
            http,
            &settings.backend_url,
            &settings.endpoint_path,
        ))
    }

    /// Use an existing `reqwest::Client`
    pub fn with_client(http: Client, backend_url: &str, endpoint_path: &str) -> Self {
        let endpoint = endpoint_url(backend_url, endpoint_path);
        info!("Backend endpoint: {}", endpoint);
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, tiktok_url: &str) -> Result<DownloadResult, FetchError> {
        let body = request_body(tiktok_url);
        debug!("Request: POST {}", self.endpoint);
        debug!("Request body: {}", body);

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        let text = response.text().await?;
        parse_response(&text)
    }
}

#[async_trait]
impl SourceResolver for BackendClient {
    fn id(&self) -> &'static str {
        "http-backend"
    }

    async fn fetch_sources(&self, tiktok_url: &str) -> Result<DownloadResult, FetchError> {
        match self.post(tiktok_url).await {
            Ok(result) => {
                info!("Backend returned {} source(s)", result.len());
                Ok(result)
            }
            Err(e) => {
                error!("Source lookup failed: {}", e);
                Err(e)
            }
        }
    }
}

/// `{"url": <tiktok_url>}` serialized as JSON
pub fn request_body(tiktok_url: &str) -> String {
    json!({ "url": tiktok_url }).to_string()
}

/// Join base URL and endpoint path with exactly one `/`
pub fn endpoint_url(backend_url: &str, endpoint_path: &str) -> String {
    format!(
        "{}/{}",
        backend_url.trim().trim_end_matches('/'),
        endpoint_path.trim().trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        assert_eq!(
            endpoint_url("https://api.example", "download"),
            "https://api.example/download"
        );
        assert_eq!(
            endpoint_url("https://api.example/", "/download"),
            "https://api.example/download"
        );
        assert_eq!(
            endpoint_url("https://api.example/v1", "tiktok/resolve"),
            "https://api.example/v1/tiktok/resolve"
        );
    }

    #[test]
    fn test_request_body_has_only_url() {
        let body = request_body("https://www.tiktok.com/@user/video/123?lang=en");
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(
            obj["url"],
            "https://www.tiktok.com/@user/video/123?lang=en"
        );
    }

    #[test]
    fn test_request_body_escapes_quotes() {
        let body = request_body(r#"https://x/"quoted"\path"#);
        assert_eq!(body, r#"{"url":"https://x/\"quoted\"\\path"}"#);
    }

    #[test]
    fn test_client_from_settings() {
        let mut settings = AppSettings::default();
        settings.backend_url = "https://api.example/".to_string();
        settings.request_timeout_secs = Some(5);
        let client = BackendClient::new(&settings).expect("client");
        assert_eq!(client.endpoint(), "https://api.example/download");
        assert_eq!(client.id(), "http-backend");
    }
}
