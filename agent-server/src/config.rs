use std::{sync::Arc, time::Duration};

use crate::agent::Extractor;

/// Default agent identity advertised on the Agent Card.
pub const DEFAULT_AGENT_NAME: &str = "DairyMathExtractor";
pub const DEFAULT_AGENT_DESCRIPTION: &str =
    "Extracts mathematical models from dairy science papers into structured JSON.";

/// Security configuration for the agent server.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// Maximum request body size in bytes (default: 10MB)
    pub max_body_size: usize,
    /// Request timeout duration (default: 30 seconds)
    pub request_timeout: Duration,
    /// Whether to include detailed error messages in JSON-RPC error
    /// responses (default: false for production)
    pub expose_error_details: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 10 * 1024 * 1024,
            request_timeout: Duration::from_secs(30),
            expose_error_details: false,
        }
    }
}

impl SecurityConfig {
    /// Create a development configuration (longer timeout, detailed errors)
    pub fn development() -> Self {
        Self {
            max_body_size: 10 * 1024 * 1024,
            request_timeout: Duration::from_secs(60),
            expose_error_details: true,
        }
    }
}

/// Configuration for the agent server.
#[derive(Clone)]
pub struct ServerConfig {
    /// Agent name on the Agent Card.
    pub agent_name: String,
    /// Agent description on the Agent Card.
    pub agent_description: String,
    /// Public base URL; card endpoints are derived from it.
    pub base_url: String,
    /// Extraction backend answering JSON-RPC requests.
    pub extractor: Arc<dyn Extractor>,
    pub security: SecurityConfig,
}

impl ServerConfig {
    pub fn new(base_url: impl Into<String>, extractor: Arc<dyn Extractor>) -> Self {
        Self {
            agent_name: DEFAULT_AGENT_NAME.to_string(),
            agent_description: DEFAULT_AGENT_DESCRIPTION.to_string(),
            base_url: base_url.into(),
            extractor,
            security: SecurityConfig::default(),
        }
    }

    pub fn with_agent_name(mut self, name: impl Into<String>) -> Self {
        self.agent_name = name.into();
        self
    }

    pub fn with_agent_description(mut self, description: impl Into<String>) -> Self {
        self.agent_description = description.into();
        self
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }

    /// Configure maximum request body size
    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.security.max_body_size = size;
        self
    }

    /// Configure request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.security.request_timeout = timeout;
        self
    }

    /// Enable detailed error messages (for development only)
    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.security.expose_error_details = expose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::PlaceholderExtractor;

    #[test]
    fn test_security_config_constructors() {
        let default = SecurityConfig::default();
        assert_eq!(default.max_body_size, 10 * 1024 * 1024);
        assert_eq!(default.request_timeout, Duration::from_secs(30));
        assert!(!default.expose_error_details);

        let dev = SecurityConfig::development();
        assert_eq!(dev.request_timeout, Duration::from_secs(60));
        assert!(dev.expose_error_details);
    }

    #[test]
    fn test_server_config_builder() {
        let config = ServerConfig::new("http://localhost:8000", Arc::new(PlaceholderExtractor))
            .with_agent_name("TestAgent")
            .with_agent_description("A test agent")
            .with_max_body_size(100)
            .with_request_timeout(Duration::from_secs(10))
            .with_error_details(true);

        assert_eq!(config.agent_name, "TestAgent");
        assert_eq!(config.agent_description, "A test agent");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.security.max_body_size, 100);
        assert_eq!(config.security.request_timeout, Duration::from_secs(10));
        assert!(config.security.expose_error_details);
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::new("http://localhost:8000", Arc::new(PlaceholderExtractor));
        assert_eq!(config.agent_name, DEFAULT_AGENT_NAME);
        assert!(!config.security.expose_error_details);
    }
}
