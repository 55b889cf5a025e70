//! Routers: one per resource group plus common health/version routes.

use crate::docs::ApiDoc;
use crate::handlers::{goods, orders, users};
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::OpenApi;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Common routes (no state): GET /health, GET /version, GET /api-docs/openapi.json.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/api-docs/openapi.json", get(openapi))
}

/// The fifteen CRUD routes, five per resource. Collection paths keep the
/// trailing slash; item paths take the integer id.
pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/users/", get(users::list).post(users::create))
        .route(
            "/users/:id",
            get(users::read).put(users::update).delete(users::delete),
        )
        .route("/goods/", get(goods::list).post(goods::create))
        .route(
            "/goods/:id",
            get(goods::read).put(goods::update).delete(goods::delete),
        )
        .route("/orders/", get(orders::list).post(orders::create))
        .route(
            "/orders/:id",
            get(orders::read).put(orders::update).delete(orders::delete),
        )
        .with_state(state)
}
