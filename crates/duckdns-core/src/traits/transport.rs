// # Update Transport Trait
//
// Defines the interface the executor uses to reach the DuckDNS endpoint.
//
// ## Implementations
//
// - reqwest: `duckdns-http` crate
// - Test doubles: `tests/common/mod.rs`
//
// ## Usage
//
// ```rust,ignore
// use duckdns_core::UpdateTransport;
//
// let body = transport
//     .get("https://www.duckdns.org/update?domains=home&token=...&ip=")
//     .await?;
// assert_eq!(body, "OK");
// ```

use async_trait::async_trait;

/// Trait for HTTP transport implementations
///
/// A transport performs one GET per call and returns the full response body
/// as text. It knows nothing about the DuckDNS response format: deciding
/// whether a body means success is owned by `UpdateExecutor`.
///
/// ## Forbidden Capabilities
/// - ❌ Retry or backoff (one invocation is exactly one request)
/// - ❌ Interpreting the response body
/// - ❌ Logging the request URL (it carries the token)
#[async_trait]
pub trait UpdateTransport: Send + Sync {
    /// Send a GET request and read the whole body
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The response body, regardless of HTTP status
    /// - `Err(Error::Http)`: If the connection failed or the body could not be read
    async fn get(&self, url: &str) -> Result<String, crate::Error>;

    /// Get the transport name (for logging/debugging)
    fn transport_name(&self) -> &'static str;
}
