// # HTTP Update Transport
//
// This crate provides the reqwest-backed transport for the DuckDNS client.
//
// ## Responsibilities
//
// - ✅ One GET per call, body returned as text
// - ✅ HTTP timeout configured (30 seconds)
// - ❌ NO retry or backoff (one invocation is one update pass)
// - ❌ NO interpretation of the body (owned by UpdateExecutor)
//
// ## Security Requirements
//
// - Request URLs carry the account token and are NEVER logged here
// - Errors are stripped of the URL before they leave this crate

use async_trait::async_trait;
use duckdns_core::traits::UpdateTransport;
use duckdns_core::{Error, Result};
use std::time::Duration;

/// Default HTTP timeout for update requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport for DuckDNS update requests
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// HTTP client for update requests
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_HTTP_TIMEOUT)
    }

    /// Create a transport with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl UpdateTransport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::http(format!("Request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            // DuckDNS signals failure in the body, so keep reading
            tracing::warn!("DuckDNS responded with HTTP status {}", status);
        }

        response
            .text()
            .await
            .map_err(|e| Error::http(format!("Failed to read response body: {}", e.without_url())))
    }

    fn transport_name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_transport_creation() {
        let transport = HttpTransport::new();
        assert!(transport.is_ok());
    }

    #[test]
    fn test_transport_name() {
        let transport = HttpTransport::new().unwrap();
        assert_eq!(transport.transport_name(), "reqwest");
    }

    #[tokio::test]
    async fn test_get_returns_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/update"))
            .and(query_param("domains", "home"))
            .and(query_param("token", "abc"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let url = format!("{}/update?domains=home&token=abc&ip=", mock_server.uri());

        let body = transport.get(&url).await.unwrap();
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_error_status_still_returns_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("KO"))
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let body = transport
            .get(&format!("{}/update", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(body, "KO");
    }

    #[tokio::test]
    async fn test_connection_failure_is_http_error() {
        // Bind then drop a listener so the port is closed
        let uri = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}", listener.local_addr().unwrap())
        };

        let transport = HttpTransport::with_timeout(Duration::from_secs(2)).unwrap();
        let err = transport
            .get(&format!("{}/update?domains=home&token=secret_token&ip=", uri))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Http(_)));
        assert!(!err.to_string().contains("secret_token"));
    }
}
