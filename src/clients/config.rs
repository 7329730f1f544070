//! Client configuration.

use serde::{Deserialize, Serialize};

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "frauddetector.us-east-1.amazonaws.com";

/// Prefix of the `X-Amz-Target` header value.
pub const DEFAULT_TARGET_PREFIX: &str = "AWSHawksNestServiceFacade";

/// Environment variable overriding the endpoint.
pub const ENDPOINT_ENV: &str = "FRAUDDETECTOR_ENDPOINT";

/// Where requests go and how they are addressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Host name or URL; a bare host gets `https://`.
    pub endpoint: String,
    pub target_prefix: String,
    /// Buffer size used when the client owns a channel dispatcher.
    pub channel_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            target_prefix: DEFAULT_TARGET_PREFIX.to_string(),
            channel_buffer: 32,
        }
    }
}

impl ClientConfig {
    /// Configuration for the regional endpoint.
    pub fn for_region(region: &str) -> Self {
        Self::default().with_endpoint(format!("frauddetector.{}.amazonaws.com", region))
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Defaults, with the endpoint taken from `FRAUDDETECTOR_ENDPOINT` when set.
    pub fn from_env() -> Self {
        match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) if !endpoint.trim().is_empty() => {
                Self::default().with_endpoint(endpoint.trim())
            }
            _ => Self::default(),
        }
    }

    /// The endpoint with a scheme.
    pub fn endpoint_url(&self) -> String {
        if self.endpoint.contains("://") {
            self.endpoint.clone()
        } else {
            format!("https://{}", self.endpoint)
        }
    }

    /// `X-Amz-Target` value for an operation.
    pub fn target(&self, operation: &str) -> String {
        format!("{}.{}", self.target_prefix, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(
            config.endpoint_url(),
            "https://frauddetector.us-east-1.amazonaws.com"
        );
        assert_eq!(
            config.target("GetDetectors"),
            "AWSHawksNestServiceFacade.GetDetectors"
        );
    }

    #[test]
    fn test_region_and_explicit_scheme() {
        assert_eq!(
            ClientConfig::for_region("eu-west-1").endpoint_url(),
            "https://frauddetector.eu-west-1.amazonaws.com"
        );
        assert_eq!(
            ClientConfig::default()
                .with_endpoint("http://localhost:8080")
                .endpoint_url(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"endpoint":"localhost"}"#).unwrap();
        assert_eq!(config.endpoint, "localhost");
        assert_eq!(config.target_prefix, DEFAULT_TARGET_PREFIX);
        assert_eq!(config.channel_buffer, 32);
    }
}
