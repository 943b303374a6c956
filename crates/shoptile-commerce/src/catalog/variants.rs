//! Variant resolution rules.

use crate::catalog::{Product, Variant};
use crate::money::Money;

/// Price step from base for the synthesized "Medium" size, in cents.
const MEDIUM_STEP_CENTS: i64 = 500;

/// Price step from base for the synthesized "Large" size, in cents.
const LARGE_STEP_CENTS: i64 = 1000;

/// Resolve the variants a tile offers.
///
/// Explicit variants pass through untouched, preserving feed order. When
/// the feed supplies none, a Small/Medium/Large ladder is synthesized off
/// the base price so every tile has at least one purchasable entry.
pub fn resolve_variants(product: &Product) -> Vec<Variant> {
    if let Some(explicit) = &product.variants {
        if !explicit.is_empty() {
            return explicit.clone();
        }
    }

    let base = product.price;
    vec![
        Variant::new(1, "Small", base),
        Variant::new(2, "Medium", base + Money::new(MEDIUM_STEP_CENTS, base.currency)),
        Variant::new(3, "Large", base + Money::new(LARGE_STEP_CENTS, base.currency)),
    ]
}

/// Whether the tile must force the shopper to pick before submitting.
/// Catalogs with zero or one entry offer no real choice.
pub fn requires_selection(variants: &[Variant]) -> bool {
    variants.len() > 1
}
