//! Total-count badge fetching

use crate::config::ReportConfig;
use crate::error::ReportError;
use reqwest::{Client, StatusCode};
use std::future::Future;

/// Something that can render the total-count badge
pub trait BadgeSource {
    /// Fetch the badge image bytes for `total` proxies
    fn fetch(&self, total: usize) -> impl Future<Output = Result<Vec<u8>, ReportError>> + Send;
}

/// Badge source backed by a shields.io style HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpBadgeSource {
    client: Client,
    config: ReportConfig,
}

impl HttpBadgeSource {
    /// Create a badge source using the timeout and user agent from `config`
    pub fn new(config: ReportConfig) -> Result<Self, ReportError> {
        let client = Client::builder()
            .timeout(config.badge_timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }
}

impl BadgeSource for HttpBadgeSource {
    async fn fetch(&self, total: usize) -> Result<Vec<u8>, ReportError> {
        let response = self.client.get(self.config.badge_url(total)).send().await?;
        if response.status() != StatusCode::OK {
            return Err(ReportError::BadgeStatus(response.status().as_u16()));
        }
        let body = response.bytes().await.map_err(ReportError::BadgeBody)?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port, returning the base URL
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}")
    }

    fn source_for(base_url: String) -> HttpBadgeSource {
        let config = ReportConfig::new()
            .with_badge_base_url(base_url)
            .with_badge_timeout(std::time::Duration::from_secs(5));
        HttpBadgeSource::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_ok_response_returns_body() {
        let base = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: image/svg+xml\r\nContent-Length: 6\r\nConnection: close\r\n\r\n<svg/>",
        )
        .await;

        let bytes = source_for(base).fetch(42).await.unwrap();
        assert_eq!(bytes, b"<svg/>");
    }

    #[tokio::test]
    async fn test_non_ok_status_is_an_error() {
        let base = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        let err = source_for(base).fetch(42).await.unwrap_err();
        assert!(matches!(err, ReportError::BadgeStatus(404)));
    }

    #[tokio::test]
    async fn test_truncated_body_is_an_error() {
        let base = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\n<svg/>",
        )
        .await;

        let err = source_for(base).fetch(42).await.unwrap_err();
        assert!(matches!(err, ReportError::BadgeBody(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let config = ReportConfig::new()
            .with_badge_base_url("http://127.0.0.1:1".to_string())
            .with_badge_timeout(std::time::Duration::from_secs(2));
        let source = HttpBadgeSource::new(config).unwrap();

        let err = source.fetch(3).await.unwrap_err();
        assert!(matches!(err, ReportError::BadgeRequest(_)));
    }
}
