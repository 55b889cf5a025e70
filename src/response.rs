//! Fixed-message response bodies.

use serde::Serialize;
use utoipa::ToSchema;

/// Confirmation body for delete endpoints. Returned whether or not a row
/// actually existed.
#[derive(Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn deleted(resource: &str) -> Self {
        Message {
            message: format!("{} was deleted.", resource),
        }
    }
}
