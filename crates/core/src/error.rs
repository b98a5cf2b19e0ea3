//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: the operation that produced it left the ledger
/// unchanged. Storage failures are not represented here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed validation (non-positive quantity, inverted thresholds, blank fields).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced product does not exist.
    #[error("product not found: {0}")]
    NotFound(String),

    /// An outbound movement asked for more than is on hand.
    #[error("insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: String,
        requested: u64,
        available: u64,
    },

    /// A product with the same identifier is already registered.
    #[error("duplicate product id: {0}")]
    DuplicateId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn insufficient_stock(product_id: impl Into<String>, requested: u64, available: u64) -> Self {
        Self::InsufficientStock {
            product_id: product_id.into(),
            requested,
            available,
        }
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }
}
