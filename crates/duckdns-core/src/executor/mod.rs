//! Update executor
//!
//! The UpdateExecutor is responsible for:
//! - Refusing to run with an incomplete request
//! - Sending one update per name, in order
//! - Classifying each response
//! - Aggregating errors into a single failure
//!
//! ## Failure Policy
//!
//! The first failing name aborts the batch. Names after it are not attempted,
//! and the whole invocation fails even if earlier names were updated.

use crate::config::UpdateRequest;
use crate::error::{Result, UpdateFailure};
use crate::traits::UpdateTransport;
use tracing::{debug, error};

/// DuckDNS update endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www.duckdns.org/update";

/// Substring DuckDNS returns in the body of a failed update
pub const FAILURE_MARKER: &str = "KO";

/// Executes a resolved [`UpdateRequest`] against the DuckDNS endpoint
pub struct UpdateExecutor {
    /// Transport used for update requests
    transport: Box<dyn UpdateTransport>,

    /// Update endpoint, without query string
    endpoint: String,
}

impl UpdateExecutor {
    /// Create an executor for the public DuckDNS endpoint
    pub fn new(transport: Box<dyn UpdateTransport>) -> Self {
        Self {
            transport,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Use a different update endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Update every name in `request`
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Every name was updated
    /// - `Err(Error::Config)`: The request is incomplete; nothing was sent
    /// - `Err(Error::Update)`: An update failed; later names were skipped
    pub async fn execute(&self, request: UpdateRequest) -> Result<()> {
        debug!("Dumping update params: {:?}", request);
        request.validate()?;

        let mut failure = UpdateFailure::new();

        for name in &request.names {
            let url = update_url(&self.endpoint, name, &request.token);
            debug!(
                "Update string: {} (via {})",
                redacted_url(&self.endpoint, name),
                self.transport.transport_name()
            );

            let body = match self.transport.get(&url).await {
                Ok(body) => body,
                Err(e) => {
                    error!("Error contacting DuckDNS server for {}: {}", name, e);
                    failure.push(e.to_string());
                    break;
                }
            };

            if body.contains(FAILURE_MARKER) {
                error!("DuckDNS rejected the update for {}", name);
                failure.push(format!("Error updating {} with DuckDNS", name));
                break;
            }

            debug!("Updated DuckDNS for name {}", name);
        }

        if failure.is_empty() {
            debug!("Updated {} name(s)", request.names.len());
        }

        failure.into_result()
    }
}

/// Build the update URL for one name
///
/// The `ip` parameter is left empty so DuckDNS uses the caller's address.
pub fn update_url(endpoint: &str, name: &str, token: &str) -> String {
    format!("{}?domains={}&token={}&ip=", endpoint, name, token)
}

fn redacted_url(endpoint: &str, name: &str) -> String {
    update_url(endpoint, name, "<REDACTED>")
}
