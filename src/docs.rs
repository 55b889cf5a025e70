//! OpenAPI document assembled from the handler annotations.

use crate::handlers;
use crate::model::{Good, NewGood, NewOrder, NewUser, Order, User};
use crate::response::Message;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::users::create,
        handlers::users::list,
        handlers::users::read,
        handlers::users::update,
        handlers::users::delete,
        handlers::goods::create,
        handlers::goods::list,
        handlers::goods::read,
        handlers::goods::update,
        handlers::goods::delete,
        handlers::orders::create,
        handlers::orders::list,
        handlers::orders::read,
        handlers::orders::update,
        handlers::orders::delete,
    ),
    components(schemas(User, NewUser, Good, NewGood, Order, NewOrder, Message))
)]
pub struct ApiDoc;
