use crate::{metrics::HandleMetrics, CoordinatorCommand, CoordinatorError};
use alloy_primitives::{Address, Bytes};
use quorum_primitives::{ConfirmationRound, RoundId};
use std::{num::NonZeroU64, time::Duration};
use tokio::sync::{mpsc, oneshot};

/// The handle used to send commands to the update coordinator.
///
/// Handles are cheap to clone; every clone addresses the same coordinator.
#[derive(Debug, Clone)]
pub struct CoordinatorHandle {
    /// The channel used to send commands to the coordinator.
    to_coordinator_tx: mpsc::Sender<CoordinatorCommand>,
    /// The handle metrics.
    handle_metrics: HandleMetrics,
}

impl CoordinatorHandle {
    /// Creates a new coordinator handle.
    pub fn new(to_coordinator_tx: mpsc::Sender<CoordinatorCommand>) -> Self {
        Self { to_coordinator_tx, handle_metrics: HandleMetrics::default() }
    }

    /// Sends a command to the coordinator.
    async fn send_command(&self, command: CoordinatorCommand) -> Result<(), CoordinatorError> {
        if self.to_coordinator_tx.send(command).await.is_err() {
            self.handle_metrics.failed_command_sends.increment(1);
            return Err(CoordinatorError::CommandChannelClosed);
        }
        Ok(())
    }

    /// Initiates a new update round, returning the allocated round identifier.
    pub async fn initiate_update(&self, payload: Bytes) -> Result<RoundId, CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::InitiateUpdate { payload, tx }).await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)
    }

    /// Confirms the round as the calling signer.
    pub async fn confirm_round(
        &self,
        caller: Address,
        round_id: RoundId,
    ) -> Result<(), CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::ConfirmRound { caller, round_id, tx }).await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)?
    }

    /// Executes a quorate round, applying the payload through the price store.
    ///
    /// The timeout bounds the price store call only; on timeout the round is left
    /// unexecuted and the call can be retried.
    pub async fn execute_round(
        &self,
        round_id: RoundId,
        payload: Bytes,
        timeout: Duration,
    ) -> Result<(), CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::ExecuteRound { round_id, payload, timeout, tx })
            .await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)?
    }

    /// Registers a new signer. Admin only.
    pub async fn add_signer(
        &self,
        caller: Address,
        signer: Address,
    ) -> Result<(), CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::AddSigner { caller, signer, tx }).await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)?
    }

    /// Removes a signer. Admin only.
    pub async fn remove_signer(
        &self,
        caller: Address,
        signer: Address,
    ) -> Result<(), CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::RemoveSigner { caller, signer, tx }).await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)?
    }

    /// Sets the confirmation threshold. Admin only.
    pub async fn set_threshold(
        &self,
        caller: Address,
        threshold: NonZeroU64,
    ) -> Result<(), CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::SetThreshold { caller, threshold, tx }).await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)?
    }

    /// Replaces the admin. Admin only.
    pub async fn set_admin(
        &self,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::SetAdmin { caller, new_admin, tx }).await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)?
    }

    /// Sets the address of the downstream price storage contract. Admin only.
    pub async fn set_price_oracle_address(
        &self,
        caller: Address,
        address: Address,
    ) -> Result<(), CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::SetPriceOracleAddress { caller, address, tx })
            .await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)?
    }

    /// Returns a snapshot of the round.
    pub async fn get_round(&self, round_id: RoundId) -> Result<ConfirmationRound, CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::GetRound { round_id, tx }).await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)?
    }

    /// Returns whether the identity has confirmed the round.
    pub async fn is_confirmed(
        &self,
        round_id: RoundId,
        id: Address,
    ) -> Result<bool, CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::IsConfirmed { round_id, id, tx }).await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)?
    }

    /// Returns the registered signers in address order.
    pub async fn list_signers(&self) -> Result<Vec<Address>, CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::ListSigners { tx }).await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)
    }

    /// Returns whether the identity is a registered signer.
    pub async fn is_signer(&self, id: Address) -> Result<bool, CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::IsSigner { id, tx }).await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)
    }

    /// Returns the identifier of the most recently created round, if any.
    pub async fn current_round_id(&self) -> Result<Option<RoundId>, CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::CurrentRoundId { tx }).await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)
    }

    /// Returns the confirmation threshold.
    pub async fn threshold(&self) -> Result<NonZeroU64, CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::Threshold { tx }).await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)
    }

    /// Returns the current admin.
    pub async fn admin(&self) -> Result<Address, CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::Admin { tx }).await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)
    }

    /// Returns the address of the downstream price storage contract.
    pub async fn price_oracle_address(&self) -> Result<Address, CoordinatorError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(CoordinatorCommand::PriceOracleAddress { tx }).await?;
        rx.await.map_err(|_| CoordinatorError::CommandChannelClosed)
    }
}
