//! Cart module.
//!
//! Line items and the store seam a successful submission appends to.

mod line_item;
mod store;

pub use line_item::CartLineItem;
pub use store::{CartStore, InMemoryCartStore};
