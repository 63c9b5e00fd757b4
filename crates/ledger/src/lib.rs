//! An in-memory ledger of confirmation rounds.
//!
//! The ledger is a pure state container: it allocates round identifiers,
//! records confirmations and execution, and rejects duplicates, but it does
//! not evaluate quorum or gate confirmation on the executed flag. Both are
//! the coordinator's job.

use alloy_primitives::{Address, Bytes};
use quorum_primitives::{ConfirmationRound, RoundId};
use std::collections::BTreeMap;

pub use error::LedgerError;
mod error;

/// The collection of confirmation rounds and the round counter.
#[derive(Debug, Default, Clone)]
pub struct RoundLedger {
    /// All rounds, keyed by identifier.
    rounds: BTreeMap<RoundId, ConfirmationRound>,
    /// The identifier the next round will be assigned.
    next_round_id: RoundId,
}

impl RoundLedger {
    /// Returns a new empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next round identifier and stores a new open round.
    pub fn create_round(&mut self, payload: Bytes, now: u64) -> RoundId {
        let round_id = self.next_round_id;
        self.next_round_id += 1;
        self.rounds.insert(round_id, ConfirmationRound::new(payload, now));
        round_id
    }

    /// Returns the round for the identifier.
    pub fn round(&self, round_id: RoundId) -> Result<&ConfirmationRound, LedgerError> {
        self.rounds.get(&round_id).ok_or(LedgerError::RoundNotFound(round_id))
    }

    /// Records a confirmation for the round, returning the new confirmation count.
    pub fn record_confirmation(
        &mut self,
        round_id: RoundId,
        signer: Address,
    ) -> Result<u64, LedgerError> {
        let round =
            self.rounds.get_mut(&round_id).ok_or(LedgerError::RoundNotFound(round_id))?;
        if !round.confirmed_by.insert(signer) {
            return Err(LedgerError::AlreadyConfirmed { round_id, signer });
        }
        Ok(round.confirmations())
    }

    /// Marks the round executed and stamps its end timestamp.
    pub fn mark_executed(&mut self, round_id: RoundId, now: u64) -> Result<(), LedgerError> {
        let round =
            self.rounds.get_mut(&round_id).ok_or(LedgerError::RoundNotFound(round_id))?;
        if round.executed {
            return Err(LedgerError::AlreadyExecuted(round_id));
        }
        round.executed = true;
        round.ended_at = Some(now);
        Ok(())
    }

    /// Returns the identifier of the most recently created round, if any.
    pub const fn current_round_id(&self) -> Option<RoundId> {
        self.next_round_id.checked_sub(1)
    }

    /// Returns the number of rounds in the ledger.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Returns whether the ledger holds no rounds.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
