//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
///
/// The cart ledger itself is deliberately infallible: misuse (removing a part
/// that isn't there, requantifying a missing line) is a no-op, and persistence
/// failures are logged rather than surfaced. What remains fallible is the
/// checkout boundary and (de)serialization.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Order submission attempted on an empty cart.
    #[error("Cannot submit an order for an empty cart")]
    EmptyCart,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Store error.
    #[error("Store error: {0}")]
    StoreError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<helio_store::StoreError> for CommerceError {
    fn from(e: helio_store::StoreError) -> Self {
        CommerceError::StoreError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
