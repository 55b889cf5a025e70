//! End-to-end CRUD tests driving the real router against in-memory SQLite.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use shoplite::{common_routes, ensure_tables, resource_routes, AppState};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tower::ServiceExt;

async fn app() -> (Router, SqlitePool) {
    // One connection so every request sees the same in-memory database.
    // foreign_keys off to match the server pool; orders may reference
    // nonexistent users/goods.
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await
        .unwrap();
    ensure_tables(&pool).await.unwrap();
    let router = Router::new()
        .merge(common_routes())
        .merge(resource_routes(AppState { pool: pool.clone() }));
    (router, pool)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&v).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get_html(app: &Router, uri: &str) -> (StatusCode, String, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

fn sample_user() -> Value {
    json!({
        "username": "alice",
        "sur_name": "liddell",
        "email": "alice@example.com",
        "password": "wonderland-pass"
    })
}

#[tokio::test]
async fn create_then_get_user_round_trips() {
    let (app, _pool) = app().await;
    let (status, created) = send(&app, "POST", "/users/", Some(sample_user())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["username"], "alice");
    assert_eq!(created["email"], "alice@example.com");
    // Password comes back digested, never the plaintext.
    let digest = created["password"].as_str().unwrap();
    assert_ne!(digest, "wonderland-pass");
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));

    let (status, fetched) = send(&app, "GET", &format!("/users/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn identical_passwords_share_digest_under_distinct_ids() {
    let (app, _pool) = app().await;
    let (_, first) = send(&app, "POST", "/users/", Some(sample_user())).await;
    let mut other = sample_user();
    other["username"] = json!("alicia");
    let (_, second) = send(&app, "POST", "/users/", Some(other)).await;
    assert_ne!(first["id"], second["id"]);
    assert_eq!(first["password"], second["password"]);
}

#[tokio::test]
async fn repeated_identical_creates_produce_distinct_rows() {
    let (app, pool) = app().await;
    send(&app, "POST", "/users/", Some(sample_user())).await;
    send(&app, "POST", "/users/", Some(sample_user())).await;
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn goods_create_accepts_prise_alias() {
    let (app, _pool) = app().await;
    let (status, created) = send(
        &app,
        "POST",
        "/goods/",
        Some(json!({"name": "Pen", "description": "Blue ink", "prise": 1.5})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Pen");
    assert_eq!(created["description"], "Blue ink");
    assert_eq!(created["price"], 1.5);

    let (status, fetched) = send(&app, "GET", &format!("/goods/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_then_get_reflects_new_values() {
    let (app, _pool) = app().await;
    let (_, created) = send(
        &app,
        "POST",
        "/goods/",
        Some(json!({"name": "Pen", "description": "Blue ink", "price": 1.5})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/goods/{}", id),
        Some(json!({"name": "Pencil", "description": "HB", "price": 0.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Pencil");

    let (_, fetched) = send(&app, "GET", &format!("/goods/{}", id), None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn user_update_redigests_password() {
    let (app, _pool) = app().await;
    let (_, created) = send(&app, "POST", "/users/", Some(sample_user())).await;
    let id = created["id"].as_i64().unwrap();

    let mut replacement = sample_user();
    replacement["password"] = json!("a-new-password!");
    let (status, updated) = send(&app, "PUT", &format!("/users/{}", id), Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    let digest = updated["password"].as_str().unwrap();
    assert_ne!(digest, "a-new-password!");
    assert_eq!(digest.len(), 64);
    assert_ne!(updated["password"], created["password"]);
}

#[tokio::test]
async fn delete_removes_row_from_get_and_list() {
    let (app, _pool) = app().await;
    let (_, created) = send(&app, "POST", "/users/", Some(sample_user())).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, "DELETE", &format!("/users/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User was deleted.");

    let (status, body) = send(&app, "GET", &format!("/users/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    let (_, _, html) = get_html(&app, "/users/").await;
    assert!(!html.contains("alice"));
}

#[tokio::test]
async fn delete_nonexistent_returns_fixed_message_and_keeps_rows() {
    let (app, pool) = app().await;
    send(&app, "POST", "/users/", Some(sample_user())).await;

    let (status, body) = send(&app, "DELETE", "/users/999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User was deleted.");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn update_nonexistent_is_not_found_and_creates_nothing() {
    let (app, pool) = app().await;
    let (status, body) = send(
        &app,
        "PUT",
        "/goods/999",
        Some(json!({"name": "Pen", "description": "", "price": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM goods")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn validation_failures_return_422() {
    let (app, _pool) = app().await;

    let mut user = sample_user();
    user["username"] = json!("al");
    let (status, body) = send(&app, "POST", "/users/", Some(user)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");

    let (status, _) = send(
        &app,
        "POST",
        "/goods/",
        Some(json!({"name": "Pen", "description": "", "price": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(
        &app,
        "POST",
        "/orders/",
        Some(json!({"user_id": 1, "good_id": 1, "date": "a date far too long to store"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_renders_html_table_with_uppercased_heading() {
    let (app, _pool) = app().await;
    send(&app, "POST", "/users/", Some(sample_user())).await;

    let (status, content_type, html) = get_html(&app, "/users/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(html.contains("<h1>USERS</h1>"));
    assert!(html.contains("<td>alice</td>"));

    let (_, _, html) = get_html(&app, "/goods/").await;
    assert!(html.contains("<h1>GOODS</h1>"));
    let (_, _, html) = get_html(&app, "/orders/").await;
    assert!(html.contains("<h1>ORDERS</h1>"));
}

#[tokio::test]
async fn order_status_defaults_false_and_orphan_references_are_accepted() {
    let (app, _pool) = app().await;
    // No user or good with these ids exists; the write is still accepted.
    let (status, created) = send(
        &app,
        "POST",
        "/orders/",
        Some(json!({"user_id": 41, "good_id": 17, "date": "2026-08-27"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], false);
    assert_eq!(created["user_id"], 41);

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/orders/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // Updates are just as permissive about the references.
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/orders/{}", id),
        Some(json!({"user_id": 99, "good_id": 98, "date": "2026-08-28", "status": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["user_id"], 99);
    assert_eq!(updated["status"], true);
}

#[tokio::test]
async fn client_supplied_id_on_create_is_ignored() {
    let (app, _pool) = app().await;
    let mut user = sample_user();
    user["id"] = json!(1234);
    let (status, created) = send(&app, "POST", "/users/", Some(user)).await;
    assert_eq!(status, StatusCode::CREATED);
    // Ids come from storage; the client's value is discarded.
    assert_eq!(created["id"], 1);
}

#[tokio::test]
async fn health_and_version_respond() {
    let (app, _pool) = app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "shoplite");
}
