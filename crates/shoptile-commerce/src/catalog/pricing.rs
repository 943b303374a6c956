//! Effective price resolution.

use crate::catalog::{requires_selection, Product, Variant};
use crate::error::CommerceError;
use crate::money::Money;

/// Resolve the unit price a submission would charge.
///
/// The base price applies when nothing is selected or when the catalog
/// offers no real choice. Otherwise the selected variant's price applies,
/// and a selection naming no catalog entry is an error rather than a
/// silent base-price fallback.
pub fn effective_price(
    product: &Product,
    variants: &[Variant],
    selection: Option<&str>,
) -> Result<Money, CommerceError> {
    let name = match selection {
        Some(name) if requires_selection(variants) => name,
        _ => return Ok(product.price),
    };

    variants
        .iter()
        .find(|variant| variant.name == name)
        .map(|variant| variant.price)
        .ok_or_else(|| CommerceError::VariantNotFound(name.to_string()))
}
