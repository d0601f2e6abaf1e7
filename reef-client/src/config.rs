//! Client configuration

/// Client configuration for connecting to the Reef backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g. "https://api.example.com")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Read configuration from the environment
    ///
    /// Loads `.env` if present, then reads `REEF_API_URL`, `REEF_API_TOKEN`
    /// and `REEF_API_TIMEOUT` (seconds). Missing optional values keep their
    /// defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var("REEF_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let mut config = Self::new(base_url);

        if let Ok(token) = std::env::var("REEF_API_TOKEN") {
            config.token = Some(token);
        }
        if let Some(timeout) = std::env::var("REEF_API_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout = timeout;
        }
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
