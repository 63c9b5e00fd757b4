//! Price-storage providers for the quorum update engine.
//!
//! The [`PriceStore`] trait is the port through which the coordinator applies
//! approved updates to the downstream price storage. The online
//! implementation submits an `updateRecords` transaction through an RPC
//! provider; the mock implementation in [`test_utils`] doubles for it in
//! tests.

pub use error::PriceStoreError;
mod error;

pub use store::{OnlinePriceStore, PriceStore};
mod store;

#[cfg(any(test, feature = "test-utils"))]
/// Common test helpers
pub mod test_utils;
