//! Process environment as a resolution source

use super::RequestSource;
use crate::config::UpdateRequest;
use tracing::debug;

/// Environment variable holding the token
pub const TOKEN_VAR: &str = "DUCK_TOKEN";

/// Environment variable holding space-separated names
pub const NAMES_VAR: &str = "DUCK_NAMES";

/// Snapshot of the variables the client reads
///
/// Captured once so resolution never touches process state directly.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Environment {
    token: String,
    names: String,
}

impl Environment {
    /// Create an environment snapshot from raw values
    pub fn new(token: impl Into<String>, names: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            names: names.into(),
        }
    }

    /// Capture `DUCK_TOKEN` and `DUCK_NAMES` from the process environment
    pub fn from_process() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Capture the variables through an arbitrary lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            token: lookup(TOKEN_VAR).unwrap_or_default(),
            names: lookup(NAMES_VAR).unwrap_or_default(),
        }
    }
}

/// Split a `DUCK_NAMES` value into names
///
/// Splits on the space character. Empty entries produced by consecutive
/// spaces are dropped.
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(' ')
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

impl RequestSource for Environment {
    fn fill(&self, mut partial: UpdateRequest) -> UpdateRequest {
        if !partial.has_token() && !self.token.is_empty() {
            partial.token = self.token.clone();
            debug!("Set token from environment");
        }

        if !partial.has_names() && !self.names.is_empty() {
            partial.names = split_names(&self.names);
            debug!("Set names from environment to {}", partial.names.join(", "));
        }

        partial
    }

    fn source_name(&self) -> &'static str {
        "environment"
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("token", &"<REDACTED>")
            .field("names", &self.names)
            .finish()
    }
}
