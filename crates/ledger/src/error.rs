use alloy_primitives::Address;
use quorum_primitives::RoundId;

/// An error produced by the round ledger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// No round exists for the identifier.
    #[error("round {0} not found")]
    RoundNotFound(RoundId),
    /// The signer has already confirmed the round.
    #[error("{signer} already confirmed round {round_id}")]
    AlreadyConfirmed {
        /// The round the confirmation targeted.
        round_id: RoundId,
        /// The signer that already confirmed.
        signer: Address,
    },
    /// The round has already been executed.
    #[error("round {0} already executed")]
    AlreadyExecuted(RoundId),
}
