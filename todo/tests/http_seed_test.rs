//! Integration tests for `HttpSeedSource` against a mock HTTP server

#![allow(clippy::unwrap_used, clippy::panic)]

use plan_today::{HttpSeedSource, TodoAction, TodoEnvironment, TodoReducer, TodoState, TodoStore};
use plan_today_core::environment::{SeedError, SeedSource};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn remote_todos(count: usize) -> serde_json::Value {
    let todos: Vec<_> = (1..=count)
        .map(|id| {
            json!({
                "userId": 1,
                "id": id,
                "title": format!("todo {id}"),
                "completed": id % 2 == 0,
            })
        })
        .collect();
    json!(todos)
}

async fn serve(template: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(template)
        .expect(1)
        .mount(&mock_server)
        .await;
    mock_server
}

/// The first six titles are kept, in response order
#[tokio::test]
async fn test_fetch_keeps_first_titles_in_order() {
    let mock_server = serve(ResponseTemplate::new(200).set_body_json(remote_todos(200))).await;
    let source = HttpSeedSource::new(format!("{}/todos", mock_server.uri()));

    let titles = source.fetch_titles(6).await.unwrap();

    assert_eq!(
        titles,
        vec!["todo 1", "todo 2", "todo 3", "todo 4", "todo 5", "todo 6"]
    );
}

#[tokio::test]
async fn test_fetch_short_collection() {
    let mock_server = serve(ResponseTemplate::new(200).set_body_json(remote_todos(2))).await;
    let source = HttpSeedSource::new(format!("{}/todos", mock_server.uri()));

    assert_eq!(source.fetch_titles(6).await.unwrap(), vec!["todo 1", "todo 2"]);
}

#[tokio::test]
async fn test_fetch_server_error() {
    let mock_server = serve(ResponseTemplate::new(500).set_body_string("boom")).await;
    let source = HttpSeedSource::new(format!("{}/todos", mock_server.uri()));

    let err = source.fetch_titles(6).await.unwrap_err();

    assert_eq!(err, SeedError::UnexpectedStatus {
        status: 500,
        body: "boom".to_string(),
    });
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let mock_server = serve(ResponseTemplate::new(200).set_body_string("<html>not json</html>")).await;
    let source = HttpSeedSource::new(format!("{}/todos", mock_server.uri()));

    let err = source.fetch_titles(6).await.unwrap_err();

    assert!(matches!(err, SeedError::MalformedResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_unreachable_host() {
    // Bind then drop to get a port nothing listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let source = HttpSeedSource::new(format!("http://127.0.0.1:{port}/todos"));

    let err = source.fetch_titles(6).await.unwrap_err();

    assert!(matches!(err, SeedError::RequestFailed(_)), "got {err:?}");
}

/// Seeding a store through HTTP replaces the list once
#[tokio::test]
async fn test_store_seeds_from_http() {
    let mock_server = serve(ResponseTemplate::new(200).set_body_json(remote_todos(10))).await;
    let env = TodoEnvironment::new(Arc::new(HttpSeedSource::new(format!(
        "{}/todos",
        mock_server.uri()
    ))));
    let store = TodoStore::new(TodoState::new(), TodoReducer::new(), env);

    store.send(TodoAction::LoadSeed).await.unwrap().wait().await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.len(), 6);
    assert_eq!(state.item(0), Some("todo 1"));
    assert_eq!(state.item(5), Some("todo 6"));
    assert_eq!(state.edit_cursor, None);
}

#[tokio::test]
async fn test_store_survives_http_failure() {
    let mock_server = serve(ResponseTemplate::new(503)).await;
    let env = TodoEnvironment::new(Arc::new(HttpSeedSource::new(format!(
        "{}/todos",
        mock_server.uri()
    ))));
    let store = TodoStore::new(TodoState::new(), TodoReducer::new(), env);

    store.send(TodoAction::LoadSeed).await.unwrap().wait().await;
    store.send(TodoAction::Add { text: "offline".into() }).await.unwrap();

    assert_eq!(store.state(|s| s.items.clone()).await, vec!["offline"]);
}
