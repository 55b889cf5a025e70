//! Wire and row types for the three resources.
//!
//! Each resource has two shapes: a create/update input without an id, and a
//! persisted row where the id is required. Clients never supply ids; SQLite
//! assigns them on insert.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub sur_name: String,
    pub email: String,
    /// SHA-256 hex digest of the submitted password, never the plaintext.
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewUser {
    pub username: String,
    pub sur_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Good {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewGood {
    pub name: String,
    pub description: String,
    // The first deployment of this API spelled the field "prise"; keep
    // accepting it so existing clients do not break.
    #[serde(alias = "prise")]
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    pub id: i64,
    /// Declared foreign key to users.id, not checked on write.
    pub user_id: i64,
    /// Declared foreign key to goods.id, not checked on write.
    pub good_id: i64,
    pub date: String,
    pub status: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewOrder {
    pub user_id: i64,
    pub good_id: i64,
    pub date: String,
    #[serde(default)]
    pub status: bool,
}
