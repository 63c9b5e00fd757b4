use crate::PriceStoreError;
use alloy_network::{ReceiptResponse, TransactionBuilder};
use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_rpc_types_eth::TransactionRequest;
use alloy_sol_types::{sol, SolCall};
use quorum_primitives::PriceUpdate;

sol! {
    function updateRecords(address[] calldata assets, uint256[] calldata values) external;
}

/// Durably applies approved price updates to the downstream price storage.
#[async_trait::async_trait]
#[auto_impl::auto_impl(&, Arc)]
pub trait PriceStore {
    /// Applies the update to the price storage deployed at `oracle`.
    async fn update_records(
        &self,
        oracle: Address,
        update: &PriceUpdate,
    ) -> Result<(), PriceStoreError>;
}

/// A [`PriceStore`] that submits `updateRecords` transactions through an RPC provider.
///
/// The provider is expected to fill and sign the transaction, e.g. via a wallet
/// layer. The call is considered applied only once the receipt reports success.
#[derive(Debug, Clone)]
pub struct OnlinePriceStore<P> {
    /// The RPC provider used to submit update transactions.
    provider: P,
}

impl<P> OnlinePriceStore<P> {
    /// Returns a new store backed by the provided RPC provider.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait::async_trait]
impl<P: Provider> PriceStore for OnlinePriceStore<P> {
    async fn update_records(
        &self,
        oracle: Address,
        update: &PriceUpdate,
    ) -> Result<(), PriceStoreError> {
        let call = updateRecordsCall {
            assets: update.assets.clone(),
            values: update.values.clone(),
        };
        let request = TransactionRequest::default().with_to(oracle).with_input(call.abi_encode());
        let receipt = self.provider.send_transaction(request).await?.get_receipt().await?;
        if !receipt.status() {
            return Err(PriceStoreError::Reverted { tx_hash: receipt.transaction_hash() });
        }
        tracing::debug!(
            target: "quorum::providers",
            %oracle,
            records = update.len(),
            tx_hash = %receipt.transaction_hash(),
            "price update applied"
        );
        Ok(())
    }
}
