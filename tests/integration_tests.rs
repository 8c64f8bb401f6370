//! End-to-end tests for the category client
//!
//! These tests exercise the reqwest-backed transport, the access service,
//! and the list view against a real HTTP server provided by wiremock.

use std::sync::{Arc, Mutex};

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use category_client::{
    connect, Category, CategoryApi, CategoryList, ClientConfig, Notifier, LOAD_FAILURE_MESSAGE,
};

/// Notifier that records every message so tests can assert on alerts
#[derive(Clone, Default)]
struct RecordingAlert {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingAlert {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingAlert {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .base_url(server.uri())
        .timeout(10)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_list_returns_backend_sequence_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "name": "Leisure"},
            {"id": 1, "name": "Housing", "description": "Rent and utilities"},
            {"id": 2, "name": "Health"}
        ])))
        .mount(&server)
        .await;

    let service = connect(&test_config(&server)).unwrap();
    let categories = service.list().await.unwrap();

    let ids: Vec<Option<u64>> = categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
    assert_eq!(categories[1].description.as_deref(), Some("Rent and utilities"));
}

#[tokio::test]
async fn test_get_by_id_issues_exactly_one_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "name": "Health"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = connect(&test_config(&server)).unwrap();
    let category = service.get_by_id(42).await.unwrap();

    assert_eq!(category.id, Some(42));
    assert_eq!(category.name, "Health");
}

#[tokio::test]
async fn test_create_resolves_with_assigned_id() {
    let server = MockServer::start().await;

    // The backend echoes the submitted body with an assigned id.
    Mock::given(method("POST"))
        .and(path("/api/categories"))
        .and(body_json(json!({"name": "Transport"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "name": "Transport"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = connect(&test_config(&server)).unwrap();
    let created = service.create(Category::new("Transport")).await.unwrap();

    assert_eq!(created.id, Some(7));
    assert_eq!(created.name, "Transport");
}

#[tokio::test]
async fn test_update_resolves_with_input_even_if_server_mutates() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/categories/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "name": "Server renamed this",
            "description": "Server added this"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = connect(&test_config(&server)).unwrap();
    let input = Category {
        id: Some(5),
        name: "Groceries".to_string(),
        description: None,
    };

    let updated = service.update(input.clone()).await.unwrap();
    assert_eq!(updated, input);
}

#[tokio::test]
async fn test_update_resolves_with_input_when_body_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/categories/5"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let service = connect(&test_config(&server)).unwrap();
    let input = Category {
        id: Some(5),
        name: "Groceries".to_string(),
        description: None,
    };

    let updated = service.update(input.clone()).await.unwrap();
    assert_eq!(updated, input);
}

#[tokio::test]
async fn test_delete_resolves_with_unit_on_204() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/categories/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let service = connect(&test_config(&server)).unwrap();
    service.delete(9).await.unwrap();
}

#[tokio::test]
async fn test_server_error_fails_the_operation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let service = connect(&test_config(&server)).unwrap();
    assert!(service.list().await.is_err());
}

#[tokio::test]
async fn test_malformed_body_fails_the_operation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let service = connect(&test_config(&server)).unwrap();
    assert!(service.list().await.is_err());
}

#[tokio::test]
async fn test_view_activation_loads_backend_sequence() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Housing"},
            {"id": 2, "name": "Leisure"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let service = connect(&test_config(&server)).unwrap();
    let mut view = CategoryList::new(RecordingAlert::default());

    view.activate(&service).await;

    let names: Vec<&str> = view.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Housing", "Leisure"]);
}

#[tokio::test]
async fn test_view_activation_failure_alerts_once_and_keeps_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let service = connect(&test_config(&server)).unwrap();
    let alert = RecordingAlert::default();
    let mut view = CategoryList::new(alert.clone());

    view.activate(&service).await;

    assert!(view.is_empty());
    assert_eq!(alert.messages(), vec![LOAD_FAILURE_MESSAGE]);
}
