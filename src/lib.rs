//! Category REST client
//!
//! This crate provides the data-access layer for a categories backend
//! resource: a [`Category`] entity, an access service translating the five
//! CRUD operations into HTTP calls, and a listing view that loads the full
//! collection on activation.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Shared utility modules
pub mod url_builder;

// Main functionality modules
pub mod client;
pub mod service;
pub mod traits;
pub mod view;

// Test doubles for the transport and notifier seams
#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export main types for convenience
pub use client::HttpTransport;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{ApiError, Result};
pub use service::{CategoryService, CATEGORY_RESOURCE};
pub use traits::{CategoryApi, Notifier, Transport};
pub use types::{Category, TransportResponse};
pub use url_builder::UrlBuilder;
pub use view::{CategoryList, LOAD_FAILURE_MESSAGE};

/// Build a category service backed by the reqwest transport
pub fn connect(config: &ClientConfig) -> Result<CategoryService<HttpTransport>> {
    let transport = HttpTransport::new(config)?;
    CategoryService::new(transport, config)
}
