//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in tile and cart submission operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product cannot be purchased right now.
    #[error("Product is out of stock")]
    OutOfStock,

    /// A variant choice is required before adding to the cart.
    #[error("Variant selection required")]
    VariantRequired,

    /// Variant not found.
    #[error("Variant not found: {0}")]
    VariantNotFound(String),

    /// The remote cart call failed.
    #[error("Cart service error: {0}")]
    Remote(#[from] RemoteError),

    /// Base price below zero.
    #[error("Negative price: {0} cents")]
    NegativePrice(i64),

    /// A variant undercuts the product's base price.
    #[error("Variant {name} priced below base: {variant_cents} < {base_cents}")]
    VariantPriceBelowBase {
        name: String,
        variant_cents: i64,
        base_cents: i64,
    },

    /// Rating outside the five-star scale.
    #[error("Rating out of range: {0}")]
    RatingOutOfRange(f64),

    /// Two variants share a name or id.
    #[error("Duplicate variant: {0}")]
    DuplicateVariant(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },
}

/// Errors a cart transport can surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RemoteError {
    /// The cart service could not be reached.
    #[error("Cart service unreachable: {0}")]
    Unreachable(String),

    /// The cart service refused the item.
    #[error("Cart service rejected the item: {0}")]
    Rejected(String),
}
