use alloy_primitives::B256;
use alloy_transport::{RpcError, TransportErrorKind};

/// An error occurring at the price store.
#[derive(Debug, thiserror::Error)]
pub enum PriceStoreError {
    /// An RPC error at the transport level.
    #[error(transparent)]
    Rpc(#[from] RpcError<TransportErrorKind>),
    /// The submitted transaction failed to confirm.
    #[error("pending transaction error: {0}")]
    PendingTransaction(#[from] alloy_provider::PendingTransactionError),
    /// The price storage rejected the update.
    #[error("update transaction {tx_hash} reverted")]
    Reverted {
        /// The hash of the reverted transaction.
        tx_hash: B256,
    },
    /// Other error.
    #[error("{0}")]
    Other(&'static str),
}
