//! Stock availability rules.

use crate::catalog::Product;

/// Decides whether a product can be purchased right now.
///
/// Implementations must be synchronous and side-effect free, tiles consult
/// them on every render and again at submission time.
pub trait StockPolicy {
    /// Whether the product is currently purchasable.
    fn is_available(&self, product: &Product) -> bool;
}

/// Parity-based placeholder rule: odd catalog ids sell, even ids report
/// sold out. Stands in until a real inventory feed is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParityStock;

impl StockPolicy for ParityStock {
    fn is_available(&self, product: &Product) -> bool {
        product.id.is_odd()
    }
}
