//! HTTP handlers, one module per resource.

pub mod goods;
pub mod orders;
pub mod users;
