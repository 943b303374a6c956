//! Product catalog module.
//!
//! Contains tile product types, variant resolution, stock rules, and
//! effective price resolution.

mod pricing;
mod product;
mod stock;
mod variants;

pub use pricing::effective_price;
pub use product::{Product, Rating, Variant};
pub use stock::{ParityStock, StockPolicy};
pub use variants::{requires_selection, resolve_variants};
