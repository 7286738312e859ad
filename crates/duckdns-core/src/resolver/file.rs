//! YAML configuration file as a resolution source

use super::RequestSource;
use crate::config::UpdateRequest;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration file at a fixed path
///
/// A missing or malformed file is not an error for resolution: the failure
/// is logged at debug level and the partial request passes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    /// Create a source for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and deserialize the file
    pub fn load(&self) -> Result<UpdateRequest> {
        let contents = std::fs::read_to_string(&self.path)?;
        let request = serde_yaml::from_str(&contents)?;
        Ok(request)
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CONFIG_FILE)
    }
}

impl RequestSource for ConfigFile {
    fn fill(&self, mut partial: UpdateRequest) -> UpdateRequest {
        let UpdateRequest { token, names } = match self.load() {
            Ok(request) => request,
            Err(e) => {
                debug!("Error reading {}: {}", self.path.display(), e);
                return partial;
            }
        };

        if token.is_empty() {
            debug!("The token is empty after parsing {}", self.path.display());
        } else if !partial.has_token() {
            partial.token = token;
            debug!("Set token from {}", self.path.display());
        }

        if names.is_empty() {
            debug!("No names to update in {}", self.path.display());
        } else if !partial.has_names() {
            partial.names = names;
            debug!(
                "Set names from {} to {}",
                self.path.display(),
                partial.names.join(", ")
            );
        }

        partial
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
