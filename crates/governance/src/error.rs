use alloy_primitives::Address;

/// An error produced by the governance aggregates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GovernanceError {
    /// The caller is not the admin.
    #[error("caller {0} is not the admin")]
    NotAdmin(Address),
    /// The identity is already a registered signer.
    #[error("{0} is already a signer")]
    AlreadyMember(Address),
    /// The identity is not a registered signer.
    #[error("{0} is not a signer")]
    NotMember(Address),
    /// The operation would leave fewer signers than the confirmation threshold.
    #[error("{members} signers cannot satisfy a threshold of {threshold}")]
    BelowThreshold {
        /// The signer count the operation would leave.
        members: u64,
        /// The confirmation threshold in force.
        threshold: u64,
    },
}
