//! Remote cart transport.

use crate::error::RemoteError;
use crate::ids::ProductId;
use async_trait::async_trait;
use std::time::Duration;

/// The remote add-to-cart round trip, injected so tests control exactly
/// when it completes.
///
/// `?Send` because workflows live on a single-threaded runtime and hold
/// non-`Send` state across the call.
#[async_trait(?Send)]
pub trait CartRemote {
    /// Announce an item to the cart service, resolving once the round
    /// trip completes.
    async fn add_to_cart(
        &self,
        product_id: ProductId,
        variant_name: &str,
    ) -> Result<(), RemoteError>;
}

/// Stand-in transport that completes after a fixed latency and never fails.
#[derive(Debug, Clone)]
pub struct SimulatedRemote {
    latency: Duration,
}

impl SimulatedRemote {
    /// Round-trip latency used when none is given.
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

    /// Create a simulator with the given round-trip latency.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Create a simulator that completes without waiting.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The configured round-trip latency.
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedRemote {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY)
    }
}

#[async_trait(?Send)]
impl CartRemote for SimulatedRemote {
    async fn add_to_cart(
        &self,
        product_id: ProductId,
        variant_name: &str,
    ) -> Result<(), RemoteError> {
        tracing::debug!(
            "simulating cart round trip for product {} variant {:?} ({}ms)",
            product_id,
            variant_name,
            self.latency.as_millis()
        );
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}
