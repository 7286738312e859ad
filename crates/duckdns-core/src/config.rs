//! Update request type for the DuckDNS client
//!
//! [`UpdateRequest`] is the single value threaded from resolution into
//! execution. It doubles as the schema of the YAML configuration file.

use serde::Deserialize;

/// Default configuration file location
pub const DEFAULT_CONFIG_FILE: &str = "duckdns.yaml";

/// Everything DuckDNS needs to update a set of records
///
/// # Configuration File
///
/// ```yaml
/// token: "a7c4d0ad-114e-40ef-ba1d-d217904a50f2"
/// domains:
///   - home
///   - office
/// ```
///
/// Missing fields deserialize as empty. `names` is accepted as an alias
/// for `domains`.
///
/// # Security
///
/// The Debug implementation does NOT expose the token.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateRequest {
    /// DuckDNS account token
    /// ⚠️ NEVER log this value
    #[serde(default)]
    pub token: String,

    /// Subdomains to update, in update order
    #[serde(default, rename = "domains", alias = "names")]
    pub names: Vec<String>,
}

impl UpdateRequest {
    /// Create a new update request
    pub fn new(token: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            token: token.into(),
            names,
        }
    }

    /// Whether a token has been set
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Whether at least one name has been set
    pub fn has_names(&self) -> bool {
        !self.names.is_empty()
    }

    /// Check that all parameters are set for an update
    pub fn is_valid(&self) -> bool {
        self.has_token() && self.has_names()
    }

    /// Validate the request
    pub fn validate(&self) -> Result<(), crate::Error> {
        if !self.is_valid() {
            return Err(crate::Error::config("arguments not set for update"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for UpdateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = if self.has_token() { "<REDACTED>" } else { "" };
        f.debug_struct("UpdateRequest")
            .field("token", &token)
            .field("names", &self.names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validity_requires_token_and_names() {
        assert!(UpdateRequest::new("token", names(&["home"])).is_valid());
        assert!(!UpdateRequest::new("", names(&["home"])).is_valid());
        assert!(!UpdateRequest::new("token", Vec::new()).is_valid());
        assert!(!UpdateRequest::default().is_valid());
    }

    #[test]
    fn test_validate_reports_config_error() {
        let err = UpdateRequest::default().validate().unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("arguments not set for update"));
    }

    #[test]
    fn test_deserialize_domains_field() {
        let yaml = "token: abc\ndomains:\n  - home\n  - office\n";
        let request: UpdateRequest = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(request.token, "abc");
        assert_eq!(request.names, names(&["home", "office"]));
    }

    #[test]
    fn test_deserialize_names_alias_and_missing_token() {
        let yaml = "names: [home]\n";
        let request: UpdateRequest = serde_yaml::from_str(yaml).unwrap();

        assert!(!request.has_token());
        assert_eq!(request.names, names(&["home"]));
    }

    #[test]
    fn test_token_not_exposed_in_debug() {
        let request = UpdateRequest::new("secret_token_12345", names(&["home"]));

        let debug_str = format!("{:?}", request);
        assert!(!debug_str.contains("secret_token"));
        assert!(debug_str.contains("<REDACTED>"));
        assert!(debug_str.contains("home"));
    }
}
