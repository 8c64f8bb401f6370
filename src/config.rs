use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Client configuration for the category backend
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the backend serving the category resource
    pub base_url: String,
    /// Request timeout in seconds (default 30)
    pub timeout_seconds: Option<u64>,
    /// Whether to follow redirects (default true)
    pub follow_redirects: Option<bool>,
}

impl ClientConfig {
    /// Create a configuration with defaults for everything but the base URL
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: None,
            follow_redirects: None,
        }
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ApiError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref).map_err(ApiError::Io)?;
        let config: ClientConfig = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ApiError::invalid_config("base_url must not be empty"));
        }

        Url::parse(&self.base_url).map_err(|e| {
            ApiError::invalid_config(format!("base_url '{}' is not a valid URL: {}", self.base_url, e))
        })?;

        if self.timeout_seconds == Some(0) {
            return Err(ApiError::invalid_config(
                "timeout_seconds must be greater than zero",
            ));
        }

        Ok(())
    }
}

/// Builder for ClientConfig to improve API ergonomics
pub struct ClientConfigBuilder {
    base_url: String,
    timeout_seconds: Option<u64>,
    follow_redirects: Option<bool>,
}

impl ClientConfigBuilder {
    /// Create a new config builder
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
            timeout_seconds: None,
            follow_redirects: None,
        }
    }

    /// Set the backend base URL
    #[must_use]
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Set whether to follow redirects
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = Some(follow);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ClientConfig> {
        let config = ClientConfig {
            base_url: self.base_url,
            timeout_seconds: self.timeout_seconds,
            follow_redirects: self.follow_redirects,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
