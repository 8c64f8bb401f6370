use crate::error::Result;
use url::Url;

/// Builder for URLs under a fixed resource path on a configured base URL
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base_url: String,
    resource: String,
}

impl UrlBuilder {
    /// Create a new URL builder for a resource path such as `api/categories`
    pub fn new<S: Into<String>>(base_url: S, resource: S) -> Self {
        Self {
            base_url: base_url.into(),
            resource: resource.into(),
        }
    }

    /// URL of the whole collection, e.g. `{base}/api/categories`
    pub fn collection(&self) -> Result<Url> {
        let full_url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.resource.trim_start_matches('/')
        );
        Ok(Url::parse(&full_url)?)
    }

    /// URL of a single item, e.g. `{base}/api/categories/{id}`
    pub fn item(&self, id: u64) -> Result<Url> {
        let collection = self.collection()?;
        let full_url = format!("{}/{}", collection.as_str().trim_end_matches('/'), id);
        Ok(Url::parse(&full_url)?)
    }
}
