//! Cart submission workflow.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::cart::{CartLineItem, CartStore};
use crate::catalog::{
    effective_price, requires_selection, resolve_variants, Product, StockPolicy, Variant,
};
use crate::error::CommerceError;
use crate::workflow::{CartRemote, NotificationService, WorkflowState};

/// Toast shown when stock rules reject the product.
const MSG_OUT_OF_STOCK: &str = "Product is out of stock!";

/// Toast shown when a multi-variant tile is submitted with no selection.
const MSG_VARIANT_REQUIRED: &str = "Please select a variant!";

/// Toast shown when an item lands in the cart.
const MSG_ADDED: &str = "Added to cart!";

/// Result of one submit request.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The attempt completed and the item was handed to the cart store.
    Added(CartLineItem),
    /// Validation or the remote call turned the attempt away.
    Rejected(CommerceError),
    /// Another attempt already owns this workflow; nothing happened.
    Busy,
}

impl SubmitOutcome {
    /// Whether the attempt put an item in the cart.
    pub fn is_added(&self) -> bool {
        matches!(self, SubmitOutcome::Added(_))
    }
}

/// Per-tile coordinator for add-to-cart attempts.
///
/// One instance per rendered tile, living on the render thread. At most
/// one attempt runs at a time: the state cell doubles as the reentrancy
/// guard, fitting the single-threaded execution model without a lock.
pub struct CartSubmissionWorkflow {
    product: Product,
    variants: Vec<Variant>,
    stock: Rc<dyn StockPolicy>,
    store: Rc<dyn CartStore>,
    notifier: Rc<dyn NotificationService>,
    remote: Rc<dyn CartRemote>,
    state: Cell<WorkflowState>,
    last_error: RefCell<Option<CommerceError>>,
}

impl CartSubmissionWorkflow {
    /// Create a workflow for one product tile. Variants are resolved once
    /// here and stay fixed for the life of the tile.
    pub fn new(
        product: Product,
        stock: Rc<dyn StockPolicy>,
        store: Rc<dyn CartStore>,
        notifier: Rc<dyn NotificationService>,
        remote: Rc<dyn CartRemote>,
    ) -> Self {
        let variants = resolve_variants(&product);
        Self {
            product,
            variants,
            stock,
            store,
            notifier,
            remote,
            state: Cell::new(WorkflowState::Idle),
            last_error: RefCell::new(None),
        }
    }

    /// The product this tile sells.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The variants resolved for this tile, in display order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Current workflow state.
    pub fn state(&self) -> WorkflowState {
        self.state.get()
    }

    /// Whether the shopper must pick a variant before submitting.
    pub fn requires_selection(&self) -> bool {
        requires_selection(&self.variants)
    }

    /// Error recorded by the most recent failed attempt. Cleared when the
    /// next attempt starts.
    pub fn last_error(&self) -> Option<CommerceError> {
        self.last_error.borrow().clone()
    }

    /// Run one add-to-cart attempt.
    ///
    /// Checks stock and selection, makes the remote round trip, then hands
    /// the line item to the cart store. A completed attempt raises exactly
    /// one notification. A submit while another attempt is in flight
    /// returns [`SubmitOutcome::Busy`] and has no side effects at all.
    pub async fn submit(&self, selection: Option<&str>) -> SubmitOutcome {
        if self.state.get().is_busy() {
            tracing::debug!(
                "ignoring submit for product {}: attempt already in flight",
                self.product.id
            );
            return SubmitOutcome::Busy;
        }

        self.transition(WorkflowState::Validating);
        self.last_error.replace(None);

        if !self.stock.is_available(&self.product) {
            return SubmitOutcome::Rejected(self.fail(CommerceError::OutOfStock, MSG_OUT_OF_STOCK));
        }

        if selection.is_none() && self.requires_selection() {
            return SubmitOutcome::Rejected(
                self.fail(CommerceError::VariantRequired, MSG_VARIANT_REQUIRED),
            );
        }

        // Resolution never yields an empty list, so the first entry is
        // always there to name the default.
        let variant_name = match selection {
            Some(name) => name.to_string(),
            None => self.variants[0].name.clone(),
        };

        self.transition(WorkflowState::Submitting);
        if let Err(err) = self.remote.add_to_cart(self.product.id, &variant_name).await {
            let err = CommerceError::Remote(err);
            let message = err.to_string();
            return SubmitOutcome::Rejected(self.fail(err, &message));
        }

        let variant_price = match effective_price(&self.product, &self.variants, selection) {
            Ok(price) => price,
            Err(err) => {
                let message = err.to_string();
                return SubmitOutcome::Rejected(self.fail(err, &message));
            }
        };

        let item = CartLineItem::new(&self.product, variant_name, variant_price);
        self.store.add_line_item(item.clone());
        self.transition(WorkflowState::Succeeded);
        self.notifier.notify_success(MSG_ADDED);
        self.transition(WorkflowState::Idle);

        SubmitOutcome::Added(item)
    }

    /// Record the error, raise its toast, and return the workflow to idle.
    fn fail(&self, err: CommerceError, message: &str) -> CommerceError {
        self.last_error.replace(Some(err.clone()));
        self.transition(WorkflowState::Failed);
        self.notifier.notify_error(message);
        self.transition(WorkflowState::Idle);
        err
    }

    fn transition(&self, next: WorkflowState) {
        let prev = self.state.replace(next);
        tracing::debug!(
            "workflow for product {}: {} -> {}",
            self.product.id,
            prev.as_str(),
            next.as_str()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::InMemoryCartStore;
    use crate::catalog::ParityStock;
    use crate::error::RemoteError;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};
    use crate::workflow::SimulatedRemote;
    use async_trait::async_trait;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn backpack(id: u64) -> Product {
        Product::new(id, "Backpack", "https://img.example/1.jpg", usd(10995))
    }

    #[derive(Default)]
    struct RecordingNotifier {
        successes: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl RecordingNotifier {
        fn successes(&self) -> Vec<String> {
            self.successes.borrow().clone()
        }

        fn errors(&self) -> Vec<String> {
            self.errors.borrow().clone()
        }
    }

    impl NotificationService for RecordingNotifier {
        fn notify_success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }

        fn notify_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    struct FailingRemote;

    #[async_trait(?Send)]
    impl CartRemote for FailingRemote {
        async fn add_to_cart(
            &self,
            _product_id: ProductId,
            _variant_name: &str,
        ) -> Result<(), RemoteError> {
            Err(RemoteError::Unreachable("cart-api.internal".to_string()))
        }
    }

    struct Harness {
        workflow: CartSubmissionWorkflow,
        store: Rc<InMemoryCartStore>,
        notifier: Rc<RecordingNotifier>,
    }

    fn harness_with_remote(product: Product, remote: Rc<dyn CartRemote>) -> Harness {
        let store = Rc::new(InMemoryCartStore::new());
        let notifier = Rc::new(RecordingNotifier::default());
        let workflow = CartSubmissionWorkflow::new(
            product,
            Rc::new(ParityStock),
            store.clone(),
            notifier.clone(),
            remote,
        );
        Harness {
            workflow,
            store,
            notifier,
        }
    }

    fn harness(product: Product) -> Harness {
        harness_with_remote(product, Rc::new(SimulatedRemote::instant()))
    }

    #[tokio::test]
    async fn test_submit_with_selection_adds_item() {
        let h = harness(backpack(1));

        let outcome = h.workflow.submit(Some("Large")).await;

        match outcome {
            SubmitOutcome::Added(item) => {
                assert_eq!(item.variant_name, "Large");
                assert_eq!(item.variant_price, usd(11995));
            }
            other => panic!("expected Added, got {other:?}"),
        }
        assert_eq!(h.store.len(), 1);
        assert_eq!(h.notifier.successes(), vec!["Added to cart!"]);
        assert!(h.notifier.errors().is_empty());
        assert_eq!(h.workflow.state(), WorkflowState::Idle);
        assert_eq!(h.workflow.last_error(), None);
    }

    #[tokio::test]
    async fn test_out_of_stock_rejects_before_anything_else() {
        let h = harness(backpack(2));

        // No selection either, but stock is checked first.
        let outcome = h.workflow.submit(None).await;

        assert_eq!(outcome, SubmitOutcome::Rejected(CommerceError::OutOfStock));
        assert!(h.store.is_empty());
        assert!(h.notifier.successes().is_empty());
        assert_eq!(h.notifier.errors(), vec!["Product is out of stock!"]);
        assert_eq!(h.workflow.state(), WorkflowState::Idle);
        assert_eq!(h.workflow.last_error(), Some(CommerceError::OutOfStock));
    }

    #[tokio::test]
    async fn test_missing_selection_rejects_multi_variant_tile() {
        let h = harness(backpack(1));

        let outcome = h.workflow.submit(None).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(CommerceError::VariantRequired)
        );
        assert!(h.store.is_empty());
        assert_eq!(h.notifier.errors(), vec!["Please select a variant!"]);
        assert_eq!(
            h.workflow.last_error(),
            Some(CommerceError::VariantRequired)
        );
    }

    #[tokio::test]
    async fn test_single_variant_tile_submits_without_selection() {
        let product = backpack(3)
            .with_variants(vec![Variant::new(1, "One Size", usd(10995))]);
        let h = harness(product);

        assert!(!h.workflow.requires_selection());
        let outcome = h.workflow.submit(None).await;

        match outcome {
            SubmitOutcome::Added(item) => {
                assert_eq!(item.variant_name, "One Size");
                assert_eq!(item.variant_price, usd(10995));
            }
            other => panic!("expected Added, got {other:?}"),
        }
        assert_eq!(h.notifier.successes(), vec!["Added to cart!"]);
    }

    #[tokio::test]
    async fn test_unknown_selection_rejected_after_round_trip() {
        let h = harness(backpack(1));

        let outcome = h.workflow.submit(Some("Gigantic")).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(CommerceError::VariantNotFound("Gigantic".to_string()))
        );
        assert!(h.store.is_empty());
        assert_eq!(h.notifier.errors().len(), 1);
        assert_eq!(h.workflow.state(), WorkflowState::Idle);
    }

    #[tokio::test]
    async fn test_remote_failure_rejects_and_recovers() {
        let h = harness_with_remote(backpack(1), Rc::new(FailingRemote));

        let outcome = h.workflow.submit(Some("Small")).await;

        match outcome {
            SubmitOutcome::Rejected(CommerceError::Remote(RemoteError::Unreachable(_))) => {}
            other => panic!("expected remote rejection, got {other:?}"),
        }
        assert!(h.store.is_empty());
        assert_eq!(h.notifier.errors().len(), 1);
        assert_eq!(h.workflow.state(), WorkflowState::Idle);
    }

    #[tokio::test]
    async fn test_failed_attempt_does_not_poison_the_next_one() {
        let h = harness(backpack(1));

        let rejected = h.workflow.submit(None).await;
        assert!(!rejected.is_added());
        assert_eq!(
            h.workflow.last_error(),
            Some(CommerceError::VariantRequired)
        );

        let added = h.workflow.submit(Some("Medium")).await;
        assert!(added.is_added());
        assert_eq!(h.store.len(), 1);
        assert_eq!(h.workflow.last_error(), None);
        assert_eq!(h.notifier.errors().len(), 1);
        assert_eq!(h.notifier.successes().len(), 1);
    }

    #[tokio::test]
    async fn test_each_submit_appends_its_own_line_item() {
        let h = harness(backpack(1));

        assert!(h.workflow.submit(Some("Small")).await.is_added());
        assert!(h.workflow.submit(Some("Large")).await.is_added());

        let items = h.store.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].variant_name, "Small");
        assert_eq!(items[1].variant_name, "Large");
        assert_eq!(h.notifier.successes().len(), 2);
    }
}
