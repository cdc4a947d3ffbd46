//! Integration tests using mock HTTP server
//!
//! Exercises the public API end to end: config → client → HTTP → typed result

use bobuild_client::{Client, ClientConfig, Error};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct User {
    id: String,
    name: String,
    email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Row {
    id: u32,
}

fn client_for(server: &MockServer) -> Client {
    let config = ClientConfig::builder()
        .host(server.uri())
        .api_key("test-api-key")
        .build()
        .unwrap();
    Client::with_config(config).unwrap()
}

// ============================================================================
// Single Object
// ============================================================================

#[tokio::test]
async fn test_get_user() {
    let mock_server = MockServer::start().await;
    let alice = User {
        id: "123".to_string(),
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
    };

    Mock::given(method("GET"))
        .and(path("/_api/users/123"))
        .and(header("Authorization", "Bearer test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&alice))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let user: User = client.get("/users/123").await.unwrap();

    assert_eq!(user.name, "Alice");
}

#[tokio::test]
async fn test_create_user_echo() {
    let mock_server = MockServer::start().await;
    let bob = User {
        id: String::new(),
        name: "Bob".to_string(),
        email: "bob@example.com".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/_api/insert"))
        .respond_with(|req: &Request| ResponseTemplate::new(200).set_body_bytes(req.body.clone()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let echoed: User = client.post("/insert", &bob).await.unwrap();

    assert_eq!(echoed, bob);
}

#[tokio::test]
async fn test_absolute_endpoint_ignores_configured_host() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = Client::new("unreachable.invalid", "test-api-key").unwrap();
    let status: serde_json::Value = client
        .get(&format!("{}/status", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(status["ok"], true);
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_get_list_example_scenario() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_api/rows"))
        .and(query_param("page", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": 1}], "total": 3})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/_api/rows"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"items": [{"id": 2}, {"id": 3}], "total": 3})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let rows: Vec<Row> = client.get_list("/rows").await.unwrap();

    assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }, Row { id: 3 }]);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_list_no_partial_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_api/rows"))
        .and(query_param("page", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": 1}], "total": 2})),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/_api/rows"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_list::<Row>("/rows").await;

    assert!(matches!(
        result,
        Err(Error::HttpStatus { status: 503, .. })
    ));
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_insert_then_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/_api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "error": false,
            "object": "user",
            "id": 99
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/_api/users/99/delete"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "error": false})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let created = client
        .insert("/users", &json!({"name": "Carol"}))
        .await
        .unwrap()
        .into_result()
        .unwrap();
    let deleted = client
        .delete(&format!("/users/{}/delete", created.id))
        .await
        .unwrap();

    assert_eq!(created.id, 99);
    assert!(deleted.is_success());
}

// ============================================================================
// Sharing
// ============================================================================

#[tokio::test]
async fn test_client_shared_across_tasks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_api/rows/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(8)
        .mount(&mock_server)
        .await;

    let client = Arc::new(client_for(&mock_server));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get::<Row>("/rows/1").await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), Row { id: 1 });
    }
}
