use crate::error::{ApiError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named classification record exchanged with the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Backend-assigned identifier, absent until the category is persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Display label
    pub name: String,
    /// Free-text description carried by the backend contract
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Category {
    /// Create a category that has not been persisted yet
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the backend has assigned this category an identifier
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// HTTP response data handed back by the transport
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub url: String,
}

impl TransportResponse {
    /// Create a new transport response
    pub fn new(status: u16, headers: HashMap<String, String>, body: String, url: String) -> Self {
        Self {
            status,
            headers,
            body,
            url,
        }
    }

    /// Check if the response indicates success (2xx status code)
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Check if the response indicates an error (non-2xx status code)
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Decode the response body as JSON into the requested type
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| ApiError::decode(self.url.clone(), e.to_string()))
    }
}
