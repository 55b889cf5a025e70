//! Shoplite: a small REST backend for users, goods and orders over SQLite.

pub mod docs;
pub mod error;
pub mod handlers;
pub mod model;
pub mod render;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use response::Message;
pub use routes::{common_routes, resource_routes};
pub use state::AppState;
pub use store::{connect, ensure_tables};
