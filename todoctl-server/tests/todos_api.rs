//! End-to-end tests for the /todos routes against an on-disk database

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use todoctl_server::{build_router, create_pool, ServerConfig};

/// Router plus the temp dir that owns its database file
struct TestApp {
    router: Router,
    _dir: TempDir,
}

impl TestApp {
    async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool(dir.path().join("todos.db")).await.unwrap();
        Self {
            router: build_router(pool, &ServerConfig::default()),
            _dir: dir,
        }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.send_raw(method, uri, body.map(|v| v.to_string())).await
    }

    async fn send_raw(&self, method: &str, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(text) => {
                builder = builder.header("content-type", "application/json");
                Body::from(text)
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn create(&self, title: &str, description: &str, done: bool) -> Value {
        let (status, body) = self
            .send(
                "POST",
                "/todos/",
                Some(json!({"title": title, "description": description, "done": done})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body
    }
}

fn id_of(item: &Value) -> i64 {
    item["id"].as_i64().expect("item has integer id")
}

#[tokio::test]
async fn create_then_read_returns_same_fields() {
    let app = TestApp::new().await;

    let created = app.create("A", "B", false).await;
    let id = id_of(&created);

    let (status, fetched) = app.send("GET", &format!("/todos/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        fetched,
        json!({"id": id, "title": "A", "description": "B", "done": false})
    );
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_without_done_defaults_to_false() {
    let app = TestApp::new().await;

    let (status, created) = app
        .send("POST", "/todos/", Some(json!({"title": "t", "description": ""})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["done"], false);
    assert_eq!(created["description"], "");
}

#[tokio::test]
async fn create_missing_title_is_unprocessable() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send("POST", "/todos/", Some(json!({"description": "B"})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    assert!(body["detail"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn malformed_json_body_is_unprocessable() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send_raw("POST", "/todos/", Some("{not json".to_string()))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    assert!(body["detail"].as_str().unwrap().starts_with("body:"));
}

#[tokio::test]
async fn update_with_wrong_field_type_is_unprocessable() {
    let app = TestApp::new().await;
    let id = id_of(&app.create("A", "B", false).await);

    let (status, body) = app
        .send(
            "PUT",
            &format!("/todos/{id}"),
            Some(json!({"title": 5, "description": "Y"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn malformed_query_is_unprocessable() {
    let app = TestApp::new().await;

    let (status, body) = app.send("GET", "/todos/?skip=abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    assert!(body["detail"].as_str().unwrap().starts_with("query:"));

    let (status, _) = app.send("GET", "/todos/?limit=ten", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn done_coerces_int_and_string_forms() {
    let app = TestApp::new().await;

    let (status, created) = app
        .send(
            "POST",
            "/todos/",
            Some(json!({"title": "A", "description": "B", "done": 1})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["done"], true);

    let (status, updated) = app
        .send(
            "PUT",
            &format!("/todos/{}", id_of(&created)),
            Some(json!({"title": "A", "description": "B", "done": "false"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["done"], false);

    let (status, _) = app
        .send(
            "POST",
            "/todos/",
            Some(json!({"title": "A", "description": "B", "done": "maybe"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn read_unknown_id_is_not_found() {
    let app = TestApp::new().await;
    let created = app.create("A", "B", false).await;

    let (status, body) = app
        .send("GET", &format!("/todos/{}", id_of(&created) + 1000), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Todo not found");
}

#[tokio::test]
async fn non_integer_id_is_unprocessable() {
    let app = TestApp::new().await;

    let (status, body) = app.send("GET", "/todos/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let app = TestApp::new().await;

    let (status, _) = app
        .send(
            "PUT",
            "/todos/999",
            Some(json!({"title": "X", "description": "Y", "done": true})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_all_fields() {
    let app = TestApp::new().await;
    let id = id_of(&app.create("A", "B", false).await);

    let (status, updated) = app
        .send(
            "PUT",
            &format!("/todos/{id}"),
            Some(json!({"title": "X", "description": "Y", "done": true})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({"id": id, "title": "X", "description": "Y", "done": true})
    );

    let (_, fetched) = app.send("GET", &format!("/todos/{id}"), None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_without_done_resets_it() {
    let app = TestApp::new().await;
    let id = id_of(&app.create("A", "B", true).await);

    let (status, updated) = app
        .send(
            "PUT",
            &format!("/todos/{id}"),
            Some(json!({"title": "A", "description": "B"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["done"], false);
}

#[tokio::test]
async fn delete_returns_item_and_removes_it() {
    let app = TestApp::new().await;
    let created = app.create("A", "B", true).await;
    let id = id_of(&created);

    let (status, deleted) = app.send("DELETE", &format!("/todos/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, created);

    let (status, _) = app.send("GET", &format!("/todos/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send("DELETE", &format!("/todos/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_pages_through_fifteen_items() {
    let app = TestApp::new().await;
    for i in 0..15 {
        app.create(&format!("todo {i}"), "", false).await;
    }

    let (status, first) = app.send("GET", "/todos/?skip=0&limit=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first.as_array().unwrap().len(), 10);

    let (status, rest) = app.send("GET", "/todos/?skip=10&limit=10", None).await;
    assert_eq!(status, StatusCode::OK);
    let rest = rest.as_array().unwrap();
    assert_eq!(rest.len(), 5);
    assert_eq!(rest[4]["title"], "todo 14");
}

#[tokio::test]
async fn list_defaults_to_ten() {
    let app = TestApp::new().await;
    for i in 0..12 {
        app.create(&i.to_string(), "", false).await;
    }

    let (status, items) = app.send("GET", "/todos/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items.as_array().unwrap().len(), 10);

    let (status, items) = app.send("GET", "/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn list_empty_is_empty_array() {
    let app = TestApp::new().await;

    let (status, items) = app.send("GET", "/todos/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn create_update_delete_read_round_trip() {
    let app = TestApp::new().await;
    let id = id_of(&app.create("A", "B", false).await);

    let (status, _) = app
        .send(
            "PUT",
            &format!("/todos/{id}"),
            Some(json!({"title": "X", "description": "Y", "done": true})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, deleted) = app.send("DELETE", &format!("/todos/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["title"], "X");

    let (status, _) = app.send("GET", &format!("/todos/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
