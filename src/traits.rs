use crate::error::Result;
use crate::types::{Category, TransportResponse};
use std::future::Future;

/// Capability for issuing HTTP requests against the backend
///
/// The access service receives an implementation at construction; tests
/// substitute a fake transport.
pub trait Transport: Send + Sync {
    /// Issue a GET request
    fn get(&self, url: &str) -> impl Future<Output = Result<TransportResponse>> + Send;

    /// Issue a POST request with a JSON body
    fn post(&self, url: &str, body: String) -> impl Future<Output = Result<TransportResponse>> + Send;

    /// Issue a PUT request with a JSON body
    fn put(&self, url: &str, body: String) -> impl Future<Output = Result<TransportResponse>> + Send;

    /// Issue a DELETE request
    fn delete(&self, url: &str) -> impl Future<Output = Result<TransportResponse>> + Send;
}

/// Domain operations exposed by the category access service
pub trait CategoryApi: Send + Sync {
    /// Fetch every category, in backend order
    fn list(&self) -> impl Future<Output = Result<Vec<Category>>> + Send;

    /// Fetch a single category by its identifier
    fn get_by_id(&self, id: u64) -> impl Future<Output = Result<Category>> + Send;

    /// Create a category; the result carries the backend-assigned id
    fn create(&self, category: Category) -> impl Future<Output = Result<Category>> + Send;

    /// Update a category; resolves with the exact input value
    fn update(&self, category: Category) -> impl Future<Output = Result<Category>> + Send;

    /// Delete a category by its identifier
    fn delete(&self, id: u64) -> impl Future<Output = Result<()>> + Send;
}

/// Capability the list view uses to surface a user-visible alert
pub trait Notifier: Send + Sync {
    /// Display a message to the user
    fn notify(&self, message: &str);
}
