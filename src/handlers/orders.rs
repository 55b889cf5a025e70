//! Order endpoints. Foreign references are stored as given, never checked.

use crate::error::AppError;
use crate::model::{NewOrder, Order};
use crate::render;
use crate::response::Message;
use crate::service::OrderService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};

#[utoipa::path(
    post,
    path = "/orders/",
    request_body = NewOrder,
    responses((status = 201, body = Order), (status = 422, description = "Date too long"))
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewOrder>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    input.validate()?;
    let order = OrderService::create(&state.pool, &input).await?;
    tracing::info!(id = order.id, "created order");
    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    get,
    path = "/orders/",
    responses((status = 200, description = "HTML table of all orders", body = String, content_type = "text/html"))
)]
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let orders = OrderService::list(&state.pool).await?;
    Ok(Html(render::table_page(&orders)))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses((status = 200, body = Order), (status = 404, description = "No such order"))
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Order>, AppError> {
    let order = OrderService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;
    Ok(Json(order))
}

#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    request_body = NewOrder,
    responses((status = 200, body = Order), (status = 404, description = "No such order"))
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<NewOrder>,
) -> Result<Json<Order>, AppError> {
    input.validate()?;
    let order = OrderService::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;
    Ok(Json(order))
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses((status = 200, description = "Fixed confirmation, sent even when nothing was deleted", body = Message))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    OrderService::delete(&state.pool, id).await?;
    Ok(Json(Message::deleted("Order")))
}
