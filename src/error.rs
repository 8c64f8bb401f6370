use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for category client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error types for category resource operations
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Category has no id; it has not been persisted yet")]
    MissingId,

    #[error("Request execution failed: {message}")]
    RequestFailed { message: String },
}

impl ApiError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new unexpected status error
    pub fn unexpected_status<S: Into<String>>(status: u16, url: S) -> Self {
        Self::UnexpectedStatus {
            status,
            url: url.into(),
        }
    }

    /// Create a new decode error
    pub fn decode<S: Into<String>>(url: S, message: S) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a new request failed error
    pub fn request_failed<S: Into<String>>(message: S) -> Self {
        Self::RequestFailed {
            message: message.into(),
        }
    }
}
