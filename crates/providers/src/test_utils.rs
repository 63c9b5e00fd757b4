//! Test utils for price stores.

use crate::{PriceStore, PriceStoreError};
use alloy_primitives::Address;
use parking_lot::Mutex;
use quorum_primitives::PriceUpdate;
use std::{sync::Arc, time::Duration};

/// A [`PriceStore`] double that records every applied update, with scripted
/// failures and artificial latency.
#[derive(Debug, Default, Clone)]
pub struct MockPriceStore {
    inner: Arc<Mutex<MockPriceStoreState>>,
}

#[derive(Debug, Default)]
struct MockPriceStoreState {
    calls: Vec<(Address, PriceUpdate)>,
    failures: u32,
    latency: Duration,
}

impl MockPriceStore {
    /// Returns a store that accepts every update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the next `n` calls with [`PriceStoreError::Other`].
    pub fn fail_next(&self, n: u32) {
        self.inner.lock().failures = n;
    }

    /// Delays every call by the provided duration.
    pub fn set_latency(&self, latency: Duration) {
        self.inner.lock().latency = latency;
    }

    /// Returns the updates applied so far, with the oracle address each was sent to.
    pub fn calls(&self) -> Vec<(Address, PriceUpdate)> {
        self.inner.lock().calls.clone()
    }
}

#[async_trait::async_trait]
impl PriceStore for MockPriceStore {
    async fn update_records(
        &self,
        oracle: Address,
        update: &PriceUpdate,
    ) -> Result<(), PriceStoreError> {
        let latency = self.inner.lock().latency;
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        let mut state = self.inner.lock();
        if state.failures > 0 {
            state.failures -= 1;
            return Err(PriceStoreError::Other("mock price store failure"));
        }
        state.calls.push((oracle, update.clone()));
        Ok(())
    }
}
