//! Storefront error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// All variants are recoverable validation or absent-data conditions. An
/// out-of-range cart index is deliberately not represented here: it signals a
/// caller bug and panics in [`crate::cart::CartEngine::remove`] instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Product id absent from the catalog (or the catalog has not loaded yet).
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Add-to-cart attempted without a fully specified variant.
    #[error("selection incomplete: choose a {missing}")]
    IncompleteSelection {
        /// The unset field, "size" or "color".
        missing: &'static str,
    },

    /// Selected size or color is not offered by the product.
    #[error("{field} {value:?} is not offered for this product")]
    VariantMismatch {
        field: &'static str,
        value: String,
    },

    /// Quantity outside the valid range.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Requested quantity exceeds the product's stock.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// Arithmetic overflow in a cart calculation.
    #[error("arithmetic overflow in cart calculation")]
    Overflow,

    /// The catalog supply failed to produce a catalog.
    #[error("catalog source failed: {0}")]
    SourceFailed(String),
}
