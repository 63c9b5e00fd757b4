use crate::CoordinatorError;
use alloy_primitives::{Address, Bytes};
use quorum_primitives::{ConfirmationRound, RoundId};
use std::{num::NonZeroU64, time::Duration};
use tokio::sync::oneshot;

/// The commands that can be sent to the update coordinator.
///
/// Every operation restricted to a signer or the admin carries the
/// authenticated caller identity explicitly; the coordinator never reads it
/// from ambient state.
#[derive(Debug)]
pub enum CoordinatorCommand {
    /// Initiate a new update round for the payload.
    InitiateUpdate {
        /// The opaque update payload.
        payload: Bytes,
        /// The channel on which the allocated round identifier is sent.
        tx: oneshot::Sender<RoundId>,
    },
    /// Confirm a round as the calling signer.
    ConfirmRound {
        /// The authenticated caller.
        caller: Address,
        /// The round to confirm.
        round_id: RoundId,
        /// The channel on which the result is sent.
        tx: oneshot::Sender<Result<(), CoordinatorError>>,
    },
    /// Execute a quorate round, forwarding the payload to the price store.
    ExecuteRound {
        /// The round to execute.
        round_id: RoundId,
        /// The update payload to apply.
        payload: Bytes,
        /// The timeout for the price store call.
        timeout: Duration,
        /// The channel on which the result is sent.
        tx: oneshot::Sender<Result<(), CoordinatorError>>,
    },
    /// Register a new signer.
    AddSigner {
        /// The authenticated caller.
        caller: Address,
        /// The signer to register.
        signer: Address,
        /// The channel on which the result is sent.
        tx: oneshot::Sender<Result<(), CoordinatorError>>,
    },
    /// Remove a signer.
    RemoveSigner {
        /// The authenticated caller.
        caller: Address,
        /// The signer to remove.
        signer: Address,
        /// The channel on which the result is sent.
        tx: oneshot::Sender<Result<(), CoordinatorError>>,
    },
    /// Set the confirmation threshold.
    SetThreshold {
        /// The authenticated caller.
        caller: Address,
        /// The new threshold.
        threshold: NonZeroU64,
        /// The channel on which the result is sent.
        tx: oneshot::Sender<Result<(), CoordinatorError>>,
    },
    /// Replace the admin.
    SetAdmin {
        /// The authenticated caller.
        caller: Address,
        /// The new admin.
        new_admin: Address,
        /// The channel on which the result is sent.
        tx: oneshot::Sender<Result<(), CoordinatorError>>,
    },
    /// Set the address of the downstream price storage contract.
    SetPriceOracleAddress {
        /// The authenticated caller.
        caller: Address,
        /// The new price storage address.
        address: Address,
        /// The channel on which the result is sent.
        tx: oneshot::Sender<Result<(), CoordinatorError>>,
    },
    /// Returns a snapshot of the round.
    GetRound {
        /// The round to look up.
        round_id: RoundId,
        /// The channel on which the snapshot is sent.
        tx: oneshot::Sender<Result<ConfirmationRound, CoordinatorError>>,
    },
    /// Returns whether the identity has confirmed the round.
    IsConfirmed {
        /// The round to look up.
        round_id: RoundId,
        /// The identity to check.
        id: Address,
        /// The channel on which the result is sent.
        tx: oneshot::Sender<Result<bool, CoordinatorError>>,
    },
    /// Returns the registered signers in address order.
    ListSigners {
        /// The channel on which the signers are sent.
        tx: oneshot::Sender<Vec<Address>>,
    },
    /// Returns whether the identity is a registered signer.
    IsSigner {
        /// The identity to check.
        id: Address,
        /// The channel on which the result is sent.
        tx: oneshot::Sender<bool>,
    },
    /// Returns the identifier of the most recently created round, if any.
    CurrentRoundId {
        /// The channel on which the identifier is sent.
        tx: oneshot::Sender<Option<RoundId>>,
    },
    /// Returns the confirmation threshold.
    Threshold {
        /// The channel on which the threshold is sent.
        tx: oneshot::Sender<NonZeroU64>,
    },
    /// Returns the current admin.
    Admin {
        /// The channel on which the admin is sent.
        tx: oneshot::Sender<Address>,
    },
    /// Returns the address of the downstream price storage contract.
    PriceOracleAddress {
        /// The channel on which the address is sent.
        tx: oneshot::Sender<Address>,
    },
}
