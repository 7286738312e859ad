//! Layered configuration resolution
//!
//! The resolver turns up to three configuration sources into one
//! [`UpdateRequest`]:
//!
//! ```text
//! Arguments ──► Environment ──► ConfigFile
//!  (highest)                     (lowest)
//! ```
//!
//! Each source only fills fields that are still empty, and resolution stops
//! as soon as the request is valid: once arguments supply both a token and
//! names, neither the environment nor the file is consulted.
//!
//! Sources are pure: [`RequestSource::fill`] takes the partial request by
//! value and returns the merged one.

mod arguments;
mod environment;
mod file;

pub use arguments::Arguments;
pub use environment::{Environment, NAMES_VAR, TOKEN_VAR, split_names};
pub use file::ConfigFile;

use crate::config::UpdateRequest;
use tracing::debug;

/// A layer of configuration that can fill in a partial update request
///
/// Implementations must never overwrite a field that is already set.
pub trait RequestSource {
    /// Fill empty fields of `partial` from this source
    fn fill(&self, partial: UpdateRequest) -> UpdateRequest;

    /// Source name (for logging/debugging)
    fn source_name(&self) -> &'static str;
}

/// Applies sources in precedence order
///
/// Sources are consulted in the order they were added. The first source
/// to be added has the highest precedence.
#[derive(Default)]
pub struct Resolver<'a> {
    sources: Vec<&'a dyn RequestSource>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver with no sources
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the standard CLI → environment → file resolver
    pub fn layered(
        arguments: &'a Arguments,
        environment: &'a Environment,
        file: &'a ConfigFile,
    ) -> Self {
        Self::new()
            .with_source(arguments)
            .with_source(environment)
            .with_source(file)
    }

    /// Append a source with lower precedence than those already added
    pub fn with_source(mut self, source: &'a dyn RequestSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Number of configured sources
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no source is configured
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Resolve an update request
    ///
    /// The result may still be invalid if no combination of sources supplied
    /// both a token and names. Validity is enforced by the executor.
    pub fn resolve(&self) -> UpdateRequest {
        let mut request = UpdateRequest::default();

        for source in &self.sources {
            if request.is_valid() {
                debug!(
                    "Request complete, skipping {} and lower sources",
                    source.source_name()
                );
                break;
            }
            request = source.fill(request);
        }

        request
    }
}
