use alloy_primitives::Bytes;
use quorum_primitives::RoundId;

/// An event emitted by the update coordinator.
///
/// The two events are sufficient for an external indexer to reconstruct the
/// round lifecycle without polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinatorEvent {
    /// A new update round has been initiated.
    RoundInitiated {
        /// The identifier of the new round.
        round_id: RoundId,
        /// The payload the round was initiated with.
        payload: Bytes,
    },
    /// A round has been executed against the price storage.
    RoundExecuted {
        /// The identifier of the executed round.
        round_id: RoundId,
        /// The timestamp recorded on the round at execution.
        ended_at: u64,
    },
}
