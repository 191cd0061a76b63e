//! Order error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur while placing or updating orders.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Orders can only be placed by a signed-in user.
    #[error("must be signed in to place an order")]
    NotSignedIn,

    /// No order has the given ID.
    #[error("order not found: {0}")]
    OrderNotFound(demo_smoke_core::OrderId),

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
