//! User endpoints: create, list (HTML), get, update, delete.

use crate::error::AppError;
use crate::model::{NewUser, User};
use crate::render;
use crate::response::Message;
use crate::service::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};

#[utoipa::path(
    post,
    path = "/users/",
    request_body = NewUser,
    responses(
        (status = 201, description = "Created user, password returned as digest", body = User),
        (status = 422, description = "Field length out of range")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), AppError> {
    input.validate()?;
    let user = UserService::create(&state.pool, &input).await?;
    tracing::info!(id = user.id, "created user");
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/users/",
    responses((status = 200, description = "HTML table of all users", body = String, content_type = "text/html"))
)]
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(Html(render::table_page(&users)))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses((status = 200, body = User), (status = 404, description = "No such user"))
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let user = UserService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    Ok(Json(user))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = NewUser,
    responses((status = 200, body = User), (status = 404, description = "No such user"))
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<NewUser>,
) -> Result<Json<User>, AppError> {
    input.validate()?;
    let user = UserService::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses((status = 200, description = "Fixed confirmation, sent even when nothing was deleted", body = Message))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    UserService::delete(&state.pool, id).await?;
    Ok(Json(Message::deleted("User")))
}
