//! Per-resource CRUD services over the shared pool.

pub mod goods;
pub mod orders;
pub mod users;
pub mod validation;

pub use goods::GoodService;
pub use orders::OrderService;
pub use users::UserService;
