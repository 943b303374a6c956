//! Cart storage.

use crate::cart::CartLineItem;
use crate::money::Money;
use std::cell::RefCell;

/// Destination for line items once a submission succeeds.
///
/// Tiles only ever append. Reading and rendering the cart belongs to
/// whatever owns the store.
pub trait CartStore {
    /// Append a line item. Ownership of the item passes to the store.
    fn add_line_item(&self, item: CartLineItem);
}

/// Process-local cart shared by every tile on a page.
///
/// Interior mutability keeps the [`CartStore`] seam `&self`, so many tiles
/// can hold the same store through an `Rc`.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    items: RefCell<Vec<CartLineItem>>,
}

impl InMemoryCartStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the items added so far, in insertion order.
    pub fn items(&self) -> Vec<CartLineItem> {
        self.items.borrow().clone()
    }

    /// Number of line items in the cart.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Sum of the charged prices. `None` when the cart is empty or the
    /// items do not share one currency.
    pub fn subtotal(&self) -> Option<Money> {
        let items = self.items.borrow();
        let first = items.first()?;
        items
            .iter()
            .skip(1)
            .try_fold(first.variant_price, |total, item| {
                total.try_add(&item.variant_price)
            })
    }
}

impl CartStore for InMemoryCartStore {
    fn add_line_item(&self, item: CartLineItem) {
        self.items.borrow_mut().push(item);
    }
}
