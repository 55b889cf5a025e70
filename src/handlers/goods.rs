//! Goods endpoints. Same shape as users, minus the password digest.

use crate::error::AppError;
use crate::model::{Good, NewGood};
use crate::render;
use crate::response::Message;
use crate::service::GoodService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};

#[utoipa::path(
    post,
    path = "/goods/",
    request_body = NewGood,
    responses(
        (status = 201, body = Good),
        (status = 422, description = "Name/description length or price out of range")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewGood>,
) -> Result<(StatusCode, Json<Good>), AppError> {
    input.validate()?;
    let good = GoodService::create(&state.pool, &input).await?;
    tracing::info!(id = good.id, "created good");
    Ok((StatusCode::CREATED, Json(good)))
}

#[utoipa::path(
    get,
    path = "/goods/",
    responses((status = 200, description = "HTML table of all goods", body = String, content_type = "text/html"))
)]
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let goods = GoodService::list(&state.pool).await?;
    Ok(Html(render::table_page(&goods)))
}

#[utoipa::path(
    get,
    path = "/goods/{id}",
    params(("id" = i64, Path, description = "Good id")),
    responses((status = 200, body = Good), (status = 404, description = "No such good"))
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Good>, AppError> {
    let good = GoodService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("good {}", id)))?;
    Ok(Json(good))
}

#[utoipa::path(
    put,
    path = "/goods/{id}",
    params(("id" = i64, Path, description = "Good id")),
    request_body = NewGood,
    responses((status = 200, body = Good), (status = 404, description = "No such good"))
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<NewGood>,
) -> Result<Json<Good>, AppError> {
    input.validate()?;
    let good = GoodService::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("good {}", id)))?;
    Ok(Json(good))
}

#[utoipa::path(
    delete,
    path = "/goods/{id}",
    params(("id" = i64, Path, description = "Good id")),
    responses((status = 200, description = "Fixed confirmation, sent even when nothing was deleted", body = Message))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    GoodService::delete(&state.pool, id).await?;
    Ok(Json(Message::deleted("Good")))
}
