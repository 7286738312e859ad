//! Command-line arguments as a resolution source

use super::RequestSource;
use crate::config::UpdateRequest;
use tracing::debug;

/// Token and names as given on the command line
///
/// Nothing is validated here: either field may be empty.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    token: Option<String>,
    names: Vec<String>,
}

impl Arguments {
    /// Create arguments from parsed flags
    pub fn new(token: Option<String>, names: Vec<String>) -> Self {
        Self { token, names }
    }

    /// Copy the arguments verbatim into a fresh request
    pub fn to_request(&self) -> UpdateRequest {
        UpdateRequest::new(self.token.clone().unwrap_or_default(), self.names.clone())
    }
}

impl RequestSource for Arguments {
    fn fill(&self, mut partial: UpdateRequest) -> UpdateRequest {
        let UpdateRequest { token, names } = self.to_request();

        if !partial.has_token() && !token.is_empty() {
            partial.token = token;
            debug!("Set token from CLI");
        }

        if !partial.has_names() && !names.is_empty() {
            partial.names = names;
            debug!("Set names from CLI to {}", partial.names.join(", "));
        }

        partial
    }

    fn source_name(&self) -> &'static str {
        "arguments"
    }
}

impl std::fmt::Debug for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arguments")
            .field("token", &self.token.as_ref().map(|_| "<REDACTED>"))
            .field("names", &self.names)
            .finish()
    }
}
