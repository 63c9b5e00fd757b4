use alloy_primitives::{Address, Bytes};
use std::collections::BTreeSet;

/// The identifier of a confirmation round. Identifiers are assigned densely
/// starting at 0, in creation order.
pub type RoundId = u64;

/// A single proposal-and-approval cycle for one update payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRound {
    /// The opaque payload the round was initiated with.
    pub payload: Bytes,
    /// The Unix timestamp at which the round was created.
    pub started_at: u64,
    /// The Unix timestamp at which the round was executed, if it was.
    pub ended_at: Option<u64>,
    /// The signers that have confirmed the round so far.
    pub confirmed_by: BTreeSet<Address>,
    /// Whether the round has been executed.
    pub executed: bool,
}

impl ConfirmationRound {
    /// Returns a new open round for the provided payload.
    pub const fn new(payload: Bytes, started_at: u64) -> Self {
        Self { payload, started_at, ended_at: None, confirmed_by: BTreeSet::new(), executed: false }
    }

    /// Returns the number of confirmations recorded so far.
    pub fn confirmations(&self) -> u64 {
        self.confirmed_by.len() as u64
    }

    /// Returns whether the provided identity has confirmed the round.
    pub fn is_confirmed_by(&self, id: &Address) -> bool {
        self.confirmed_by.contains(id)
    }
}
