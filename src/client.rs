use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::traits::Transport;
use crate::types::TransportResponse;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use std::collections::HashMap;
use std::time::Duration;

/// reqwest-backed transport for the category backend
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new transport from client configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let timeout = config.timeout_seconds.unwrap_or(30);
        let follow_redirects = config.follow_redirects.unwrap_or(true);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .redirect(if follow_redirects {
                reqwest::redirect::Policy::default()
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()?;

        Ok(Self { client })
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<TransportResponse> {
        let mut request_builder = self.client.request(method, url);

        if let Some(body) = body {
            request_builder = request_builder
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        let request = request_builder.build()?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        Self::convert_response(response).await
    }

    /// Convert a reqwest Response into our TransportResponse
    async fn convert_response(response: Response) -> Result<TransportResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(name.to_string(), value_str.to_string());
            }
        }

        let body = response.text().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
            url,
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        self.execute(Method::GET, url, None).await
    }

    async fn post(&self, url: &str, body: String) -> Result<TransportResponse> {
        self.execute(Method::POST, url, Some(body)).await
    }

    async fn put(&self, url: &str, body: String) -> Result<TransportResponse> {
        self.execute(Method::PUT, url, Some(body)).await
    }

    async fn delete(&self, url: &str) -> Result<TransportResponse> {
        self.execute(Method::DELETE, url, None).await
    }
}
