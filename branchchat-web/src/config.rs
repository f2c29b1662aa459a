//! Frontend configuration module
//!
//! Provides the endpoints the client talks to. Both can be overridden at
//! compile time through environment variables.

/// Frontend configuration for backend endpoints
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the REST backend
    pub api_base_url: String,
    /// Websocket endpoint used for streamed chat replies
    pub socket_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("BRANCHCHAT_API_URL")
                .unwrap_or("http://localhost:8000")
                .to_string(),
            socket_url: option_env!("BRANCHCHAT_SOCKET_URL")
                .unwrap_or("ws://localhost:8090")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the REST base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the websocket endpoint
    pub fn socket_url(&self) -> &str {
        &self.socket_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_defaults() {
        let config = FrontendConfig::new();
        assert!(config.api_base_url().starts_with("http"));
        assert!(config.socket_url().starts_with("ws"));
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.api_base_url(), config2.api_base_url());
        assert_eq!(config1.socket_url(), config2.socket_url());
    }
}
