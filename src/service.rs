use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::traits::{CategoryApi, Transport};
use crate::types::{Category, TransportResponse};
use crate::url_builder::UrlBuilder;

/// Fixed resource path of the category collection on the backend
pub const CATEGORY_RESOURCE: &str = "api/categories";

/// Access service for the category REST resource
///
/// The sole boundary between the application and the backend: translates
/// the five domain operations into transport calls against
/// [`CATEGORY_RESOURCE`], decodes JSON payloads into [`Category`] values,
/// and funnels every failure through a single log-and-reraise path.
#[derive(Debug, Clone)]
pub struct CategoryService<T> {
    transport: T,
    urls: UrlBuilder,
}

impl<T: Transport> CategoryService<T> {
    /// Create a service speaking to the backend described by `config`
    pub fn new(transport: T, config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            transport,
            urls: UrlBuilder::new(config.base_url.as_str(), CATEGORY_RESOURCE),
        })
    }

    /// Failure funnel: log the raw error and re-raise it unchanged
    fn handle_error(&self, error: ApiError) -> ApiError {
        tracing::error!(error = %error, "category request failed");
        error
    }

    /// Reject non-2xx responses before any decoding happens
    fn ensure_success(response: TransportResponse) -> Result<TransportResponse> {
        if response.is_error() {
            return Err(ApiError::unexpected_status(response.status, response.url));
        }
        Ok(response)
    }

    fn encode(category: &Category) -> Result<String> {
        serde_json::to_string(category)
            .map_err(|e| ApiError::request_failed(format!("Failed to encode category: {}", e)))
    }

    async fn fetch_collection(&self) -> Result<Vec<Category>> {
        let url = self.urls.collection()?;
        let response = Self::ensure_success(self.transport.get(url.as_str()).await?)?;
        response.json()
    }

    async fn fetch_item(&self, id: u64) -> Result<Category> {
        let url = self.urls.item(id)?;
        let response = Self::ensure_success(self.transport.get(url.as_str()).await?)?;
        response.json()
    }

    async fn create_item(&self, category: Category) -> Result<Category> {
        let url = self.urls.collection()?;
        let body = Self::encode(&category)?;
        let response = Self::ensure_success(self.transport.post(url.as_str(), body).await?)?;
        response.json()
    }

    async fn update_item(&self, category: Category) -> Result<Category> {
        let id = category.id.ok_or(ApiError::MissingId)?;
        let url = self.urls.item(id)?;
        let body = Self::encode(&category)?;
        Self::ensure_success(self.transport.put(url.as_str(), body).await?)?;

        // Response body discarded; the caller gets back the value it sent.
        Ok(category)
    }

    async fn delete_item(&self, id: u64) -> Result<()> {
        let url = self.urls.item(id)?;
        Self::ensure_success(self.transport.delete(url.as_str()).await?)?;
        Ok(())
    }
}

impl<T: Transport> CategoryApi for CategoryService<T> {
    async fn list(&self) -> Result<Vec<Category>> {
        self.fetch_collection().await.map_err(|e| self.handle_error(e))
    }

    async fn get_by_id(&self, id: u64) -> Result<Category> {
        self.fetch_item(id).await.map_err(|e| self.handle_error(e))
    }

    async fn create(&self, category: Category) -> Result<Category> {
        self.create_item(category).await.map_err(|e| self.handle_error(e))
    }

    async fn update(&self, category: Category) -> Result<Category> {
        self.update_item(category).await.map_err(|e| self.handle_error(e))
    }

    async fn delete(&self, id: u64) -> Result<()> {
        self.delete_item(id).await.map_err(|e| self.handle_error(e))
    }
}
