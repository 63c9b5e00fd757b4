use alloy_primitives::Address;
use quorum_governance::GovernanceError;
use quorum_ledger::LedgerError;
use quorum_primitives::{PayloadDecodeError, RoundId};
use quorum_providers::PriceStoreError;
use std::time::Duration;

/// An error produced by the update coordinator.
#[derive(Debug, thiserror::Error)]
pub enum CoordinatorError {
    /// A governance error: admin gate or signer set mutation.
    #[error(transparent)]
    Governance(#[from] GovernanceError),
    /// A round ledger error.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    /// The caller is not a registered signer.
    #[error("caller {0} is not a signer")]
    NotSigner(Address),
    /// The round has not reached quorum.
    #[error("round {round_id} has {confirmations} of {threshold} required confirmations")]
    InsufficientConfirmations {
        /// The round execution was attempted for.
        round_id: RoundId,
        /// The confirmations recorded on the round.
        confirmations: u64,
        /// The threshold in force at execution time.
        threshold: u64,
    },
    /// The execute payload could not be decoded.
    #[error(transparent)]
    Payload(#[from] PayloadDecodeError),
    /// The price store rejected the update.
    #[error("price store error: {0}")]
    PriceStore(#[from] PriceStoreError),
    /// The price store call exceeded the caller-supplied timeout.
    #[error("price store call timed out after {0:?}")]
    PriceStoreTimeout(Duration),
    /// The coordinator command channel was closed.
    #[error("command channel closed")]
    CommandChannelClosed,
}
