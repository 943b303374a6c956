//! Cart line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A single entry handed to the cart by a successful submission.
///
/// Carries a denormalized copy of the tile fields so the cart can render
/// without another catalog lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Product the entry was created from.
    pub product_id: ProductId,
    /// Product title at submission time.
    pub title: String,
    /// Tile artwork URL.
    pub image: String,
    /// Name of the configuration being purchased.
    pub variant_name: String,
    /// Unit price actually charged.
    pub variant_price: Money,
    /// Unix timestamp the entry was created.
    pub added_at: i64,
}

impl CartLineItem {
    /// Create a line item from a product and the resolved selection.
    pub fn new(product: &Product, variant_name: impl Into<String>, variant_price: Money) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            image: product.image.clone(),
            variant_name: variant_name.into(),
            variant_price,
            added_at: current_timestamp(),
        }
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
