//! Product tile domain types and cart submission logic for ShopTile.
//!
//! This crate holds everything a storefront tile decides, away from any
//! particular render layer:
//!
//! - **Catalog**: Products, variant resolution, stock rules, effective pricing
//! - **Cart**: Line items and the shared store a submission appends to
//! - **Workflow**: The async add-to-cart attempt with its state machine
//! - **Display**: The precomputed view a render layer draws
//!
//! # Example
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use shoptile_commerce::prelude::*;
//!
//! let product = Product::new(1, "Backpack", "https://img.example/1.jpg",
//!     Money::new(10995, Currency::USD));
//!
//! let store = Rc::new(InMemoryCartStore::new());
//! let workflow = CartSubmissionWorkflow::new(
//!     product,
//!     Rc::new(ParityStock),
//!     store.clone(),
//!     Rc::new(TracingNotifier),
//!     Rc::new(SimulatedRemote::default()),
//! );
//!
//! // On the render thread:
//! let outcome = workflow.submit(Some("Large")).await;
//! assert!(outcome.is_added());
//! assert_eq!(store.len(), 1);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod display;
pub mod workflow;

pub use error::{CommerceError, RemoteError};
pub use ids::*;
pub use money::{Currency, Locale, Money, PriceFormatter};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, RemoteError};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Locale, Money, PriceFormatter};

    // Catalog
    pub use crate::catalog::{
        effective_price, requires_selection, resolve_variants, ParityStock, Product, Rating,
        StockPolicy, Variant,
    };

    // Cart
    pub use crate::cart::{CartLineItem, CartStore, InMemoryCartStore};

    // Workflow
    pub use crate::workflow::{
        CartRemote, CartSubmissionWorkflow, NotificationService, SimulatedRemote, SubmitOutcome,
        TracingNotifier, WorkflowState,
    };

    // Display
    pub use crate::display::{TileView, VariantChoice};
}
