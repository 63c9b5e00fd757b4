use crate::GovernanceError;
use alloy_primitives::Address;
use std::{collections::BTreeSet, num::NonZeroU64};

/// The set of authorized signers and the confirmation threshold.
///
/// The registry never holds fewer members than the threshold requires: both
/// construction and removal enforce the floor. The threshold itself can be
/// raised above the member count, which leaves future rounds unexecutable
/// until the set grows back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerRegistry {
    /// The registered signers.
    members: BTreeSet<Address>,
    /// The number of confirmations required to execute a round.
    threshold: NonZeroU64,
}

impl SignerRegistry {
    /// Returns a new registry, failing with [`GovernanceError::BelowThreshold`] if fewer
    /// members than the threshold are provided. Duplicate members are collapsed.
    pub fn new(
        members: impl IntoIterator<Item = Address>,
        threshold: NonZeroU64,
    ) -> Result<Self, GovernanceError> {
        let members: BTreeSet<_> = members.into_iter().collect();
        if (members.len() as u64) < threshold.get() {
            return Err(GovernanceError::BelowThreshold {
                members: members.len() as u64,
                threshold: threshold.get(),
            });
        }
        Ok(Self { members, threshold })
    }

    /// Returns whether the identity is a registered signer.
    pub fn is_member(&self, id: &Address) -> bool {
        self.members.contains(id)
    }

    /// Registers a new signer.
    pub fn add(&mut self, id: Address) -> Result<(), GovernanceError> {
        if !self.members.insert(id) {
            return Err(GovernanceError::AlreadyMember(id));
        }
        Ok(())
    }

    /// Removes a signer.
    ///
    /// Fails with [`GovernanceError::NotMember`] for an unknown identity and with
    /// [`GovernanceError::BelowThreshold`] when removal would leave fewer members
    /// than the threshold. The membership check runs first.
    pub fn remove(&mut self, id: &Address) -> Result<(), GovernanceError> {
        if !self.members.contains(id) {
            return Err(GovernanceError::NotMember(*id));
        }
        let remaining = self.members.len() as u64 - 1;
        if remaining < self.threshold.get() {
            return Err(GovernanceError::BelowThreshold {
                members: remaining,
                threshold: self.threshold.get(),
            });
        }
        self.members.remove(id);
        Ok(())
    }

    /// Sets the confirmation threshold.
    ///
    /// The value is not validated against the member count: the admin can set a
    /// threshold no current signer set can reach.
    pub fn set_threshold(&mut self, threshold: NonZeroU64) {
        self.threshold = threshold;
    }

    /// Returns the confirmation threshold.
    pub const fn threshold(&self) -> NonZeroU64 {
        self.threshold
    }

    /// Returns the registered signers in address order.
    pub fn signers(&self) -> Vec<Address> {
        self.members.iter().copied().collect()
    }

    /// Returns the number of registered signers.
    pub fn len(&self) -> u64 {
        self.members.len() as u64
    }

    /// Returns whether the registry holds no signers.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
