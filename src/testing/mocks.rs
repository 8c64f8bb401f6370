use crate::error::{ApiError, Result};
use crate::traits::{Notifier, Transport};
use crate::types::TransportResponse;
use std::collections::HashMap;
use std::sync::Mutex;

/// Shorthand for building a response in tests
pub fn json_response(status: u16, body: &str, url: &str) -> TransportResponse {
    TransportResponse::new(status, HashMap::new(), body.to_string(), url.to_string())
}

/// A request captured by the mock transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub body: Option<String>,
}

/// Mock transport for testing
///
/// Responses are keyed by method and URL; every issued request is recorded
/// in order so tests can assert on the wire traffic.
pub struct MockTransport {
    responses: HashMap<String, TransportResponse>,
    should_fail: bool,
    failure_message: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            should_fail: false,
            failure_message: "Mock failure".to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Register the response returned for `method` requests to `url`
    pub fn with_response(mut self, method: &str, url: &str, response: TransportResponse) -> Self {
        self.responses.insert(Self::make_key(method, url), response);
        self
    }

    /// Make every request fail with the given message
    pub fn with_failure<S: Into<String>>(mut self, message: S) -> Self {
        self.should_fail = true;
        self.failure_message = message.into();
        self
    }

    /// Requests observed so far, in issue order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn make_key(method: &str, url: &str) -> String {
        format!("{} {}", method, url)
    }

    fn record_and_respond(
        &self,
        method: &str,
        url: &str,
        body: Option<String>,
    ) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            body,
        });

        if self.should_fail {
            return Err(ApiError::request_failed(self.failure_message.clone()));
        }

        let key = Self::make_key(method, url);
        self.responses.get(&key).cloned().ok_or_else(|| {
            ApiError::request_failed(format!("Mock response not found for key: {}", key))
        })
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        self.record_and_respond("GET", url, None)
    }

    async fn post(&self, url: &str, body: String) -> Result<TransportResponse> {
        self.record_and_respond("POST", url, Some(body))
    }

    async fn put(&self, url: &str, body: String) -> Result<TransportResponse> {
        self.record_and_respond("PUT", url, Some(body))
    }

    async fn delete(&self, url: &str) -> Result<TransportResponse> {
        self.record_and_respond("DELETE", url, None)
    }
}

/// Notifier that records every message it is asked to display
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Messages displayed so far, in emission order
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
