//! HTTP transport used by the populator.

use crate::error::HttpPopulatorError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// A JSON POST request, fully built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a single request and waits for the full response.
///
/// Implementations return `Err` only when no response was received.
/// Any HTTP status, including errors, is an `Ok` response.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn post(&self, request: &HttpRequest) -> Result<HttpResponse, HttpPopulatorError>;
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    async fn post(&self, request: &HttpRequest) -> Result<HttpResponse, HttpPopulatorError> {
        (**self).post(request).await
    }
}

/// [`HttpClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Build a client, optionally with a per-request timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, HttpPopulatorError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn post(&self, request: &HttpRequest) -> Result<HttpResponse, HttpPopulatorError> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.body(request.body.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Accept one connection, answer it, and return the raw request text.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut chunk = [0u8; 4096];

            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&chunk[..n]);
                if request_complete(&received) {
                    break;
                }
            }

            let response = format!(
                "{status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            String::from_utf8_lossy(&received).to_string()
        });

        (format!("http://{addr}/api/products/"), handle)
    }

    fn request_complete(received: &[u8]) -> bool {
        let text = String::from_utf8_lossy(received);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        received.len() >= header_end + 4 + content_length
    }

    fn json_request(url: String) -> HttpRequest {
        HttpRequest {
            url,
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("access_token".to_string(), "secret".to_string()),
            ],
            body: r#"{"id":"prod-abc"}"#.to_string(),
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = json_request("http://localhost".to_string());
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("ACCESS_TOKEN"), Some("secret"));
        assert_eq!(request.header("authorization"), None);
    }

    #[tokio::test]
    async fn test_post_sends_headers_and_body() {
        let (url, server) = serve_once("HTTP/1.1 200 OK", r#"{"ok":true}"#).await;
        let client = ReqwestClient::new(Some(Duration::from_secs(5))).unwrap();

        let response = client.post(&json_request(url)).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"ok":true}"#);

        let raw = server.await.unwrap();
        let lower = raw.to_lowercase();
        assert!(raw.starts_with("POST /api/products/ HTTP/1.1"));
        assert!(lower.contains("content-type: application/json"));
        assert!(lower.contains("access_token: secret"));
        assert!(raw.ends_with(r#"{"id":"prod-abc"}"#));
    }

    #[tokio::test]
    async fn test_post_returns_error_status_as_response() {
        let (url, server) = serve_once("HTTP/1.1 403 Forbidden", "invalid api key").await;
        let client = ReqwestClient::new(None).unwrap();

        let response = client.post(&json_request(url)).await.unwrap();
        assert_eq!(response.status, 403);
        assert_eq!(response.body, "invalid api key");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_post_connection_refused() {
        // Bind then drop to get a port nothing listens on
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let client = ReqwestClient::new(Some(Duration::from_secs(5))).unwrap();

        let result = client.post(&json_request(format!("http://{addr}/"))).await;
        assert!(matches!(result, Err(HttpPopulatorError::Http(_))));
    }
}
