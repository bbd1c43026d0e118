use serde::Serialize;
use utoipa::ToSchema;

pub mod categories;
pub mod error;
pub mod health;
pub mod products;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod users_tests;

/// Plain acknowledgement body for deletes and other verb-only endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
