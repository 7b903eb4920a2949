//! Commerce error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in storefront operations.
///
/// Cart operations and aggregation never fail; a missing product is always a
/// no-op or a zero contribution. Only bulk import rejects input outright.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Bulk import payload was not a sequence of product records.
    #[error("Invalid import: {0}")]
    InvalidImport(String),

    /// The same identifier appeared twice in one product list.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// Unknown category name.
    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    /// Unknown catalog sort key.
    #[error("Unknown sort key: {0}")]
    InvalidSortKey(String),

    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    InvalidCurrency(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
