//! The update coordinator for the quorum update engine.
//!
//! The [`UpdateCoordinator`] owns the admin authority, the signer registry and
//! the round ledger, and is the sole mutator of all three. It runs as a single
//! task consuming one command at a time, which gives every read-then-write
//! sequence a single global ordering: two confirmations by the same signer for
//! the same round resolve with exactly one `AlreadyConfirmed` failure, and the
//! check-quorum/call-store/mark-executed sequence of execution is atomic with
//! respect to every other command.

use alloy_primitives::{Address, Bytes};
use quorum_governance::{Authority, SignerRegistry};
use quorum_ledger::{LedgerError, RoundLedger};
use quorum_primitives::{unix_timestamp, PriceUpdate, RoundId};
use quorum_providers::PriceStore;
use std::{
    fmt::{self, Debug, Formatter},
    num::NonZeroU64,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

mod command;
pub use command::CoordinatorCommand;

mod config;
pub use config::CoordinatorConfig;

mod error;
pub use error::CoordinatorError;

mod event;
pub use event::CoordinatorEvent;

mod handle;
pub use handle::CoordinatorHandle;

mod metrics;
pub use metrics::{CoordinatorMetrics, HandleMetrics};

/// The size of the command channel.
pub const COMMAND_CHANNEL_SIZE: usize = 100;

/// The size of the event channel.
pub const EVENT_CHANNEL_SIZE: usize = 100;

/// The coordinator gating price updates behind signer quorum.
///
/// Rounds move through three states: `Open` (created, below quorum), `Quorate`
/// (confirmations have reached the threshold) and `Executed` (terminal). The
/// quorum check always reads the live registry threshold, so administrative
/// threshold changes apply to open rounds retroactively.
pub struct UpdateCoordinator<PS> {
    /// The receiver for commands from [`CoordinatorHandle`]s.
    commands: mpsc::Receiver<CoordinatorCommand>,
    /// The admin authority.
    authority: Authority,
    /// The signer registry.
    registry: SignerRegistry,
    /// The round ledger.
    ledger: RoundLedger,
    /// The price store applying approved updates.
    store: PS,
    /// The address of the downstream price storage contract.
    price_oracle_address: Address,
    /// The sender half of the event channel.
    events: mpsc::Sender<Arc<CoordinatorEvent>>,
    /// The coordinator metrics.
    metrics: CoordinatorMetrics,
}

impl<PS: PriceStore + Send + Sync + 'static> UpdateCoordinator<PS> {
    /// Creates a new coordinator along with its handle and the stream of
    /// [`CoordinatorEvent`]s.
    ///
    /// Fails if the initial signer set cannot satisfy the threshold.
    pub fn new(
        config: CoordinatorConfig,
        store: PS,
    ) -> Result<(Self, CoordinatorHandle, ReceiverStream<Arc<CoordinatorEvent>>), CoordinatorError>
    {
        let registry = SignerRegistry::new(config.signers, config.threshold)?;
        let (command_tx, command_rx) = mpsc::channel(config.command_channel_size);
        let (event_tx, event_rx) = mpsc::channel(config.event_channel_size);
        let coordinator = Self {
            commands: command_rx,
            authority: Authority::new(config.admin),
            registry,
            ledger: RoundLedger::new(),
            store,
            price_oracle_address: config.price_oracle_address,
            events: event_tx,
            metrics: CoordinatorMetrics::default(),
        };
        Ok((coordinator, CoordinatorHandle::new(command_tx), event_rx.into()))
    }

    /// Spawns a new coordinator onto the tokio runtime.
    pub fn spawn(
        config: CoordinatorConfig,
        store: PS,
    ) -> Result<(CoordinatorHandle, ReceiverStream<Arc<CoordinatorEvent>>), CoordinatorError> {
        let (coordinator, handle, events) = Self::new(config, store)?;
        tokio::spawn(coordinator.run());
        Ok((handle, events))
    }

    /// Execution loop for the coordinator.
    pub async fn run(mut self) {
        while let Some(command) = self.commands.recv().await {
            self.on_command(command).await;
        }
        tracing::info!(target: "quorum::coordinator", "command channel closed - shutting down");
    }

    async fn on_command(&mut self, command: CoordinatorCommand) {
        match command {
            CoordinatorCommand::InitiateUpdate { payload, tx } => {
                let _ = tx.send(self.initiate_update(payload).await);
            }
            CoordinatorCommand::ConfirmRound { caller, round_id, tx } => {
                let _ = tx.send(self.confirm_round(caller, round_id));
            }
            CoordinatorCommand::ExecuteRound { round_id, payload, timeout, tx } => {
                let _ = tx.send(self.execute_round(round_id, payload, timeout).await);
            }
            CoordinatorCommand::AddSigner { caller, signer, tx } => {
                let _ = tx.send(self.add_signer(caller, signer));
            }
            CoordinatorCommand::RemoveSigner { caller, signer, tx } => {
                let _ = tx.send(self.remove_signer(caller, signer));
            }
            CoordinatorCommand::SetThreshold { caller, threshold, tx } => {
                let _ = tx.send(self.set_threshold(caller, threshold));
            }
            CoordinatorCommand::SetAdmin { caller, new_admin, tx } => {
                let _ = tx.send(self.set_admin(caller, new_admin));
            }
            CoordinatorCommand::SetPriceOracleAddress { caller, address, tx } => {
                let _ = tx.send(self.set_price_oracle_address(caller, address));
            }
            CoordinatorCommand::GetRound { round_id, tx } => {
                let _ = tx.send(self.ledger.round(round_id).cloned().map_err(Into::into));
            }
            CoordinatorCommand::IsConfirmed { round_id, id, tx } => {
                let _ = tx.send(
                    self.ledger
                        .round(round_id)
                        .map(|round| round.is_confirmed_by(&id))
                        .map_err(Into::into),
                );
            }
            CoordinatorCommand::ListSigners { tx } => {
                let _ = tx.send(self.registry.signers());
            }
            CoordinatorCommand::IsSigner { id, tx } => {
                let _ = tx.send(self.registry.is_member(&id));
            }
            CoordinatorCommand::CurrentRoundId { tx } => {
                let _ = tx.send(self.ledger.current_round_id());
            }
            CoordinatorCommand::Threshold { tx } => {
                let _ = tx.send(self.registry.threshold());
            }
            CoordinatorCommand::Admin { tx } => {
                let _ = tx.send(self.authority.admin());
            }
            CoordinatorCommand::PriceOracleAddress { tx } => {
                let _ = tx.send(self.price_oracle_address);
            }
        }
    }

    /// Initiation is unprivileged: only confirmation and execution are gated.
    async fn initiate_update(&mut self, payload: Bytes) -> RoundId {
        let round_id = self.ledger.create_round(payload.clone(), unix_timestamp());
        self.metrics.rounds_initiated.increment(1);
        tracing::info!(target: "quorum::coordinator", round_id, "update round initiated");
        self.notify(CoordinatorEvent::RoundInitiated { round_id, payload }).await;
        round_id
    }

    fn confirm_round(&mut self, caller: Address, round_id: RoundId) -> Result<(), CoordinatorError> {
        // Authorization comes before any round state is touched.
        if !self.registry.is_member(&caller) {
            return Err(CoordinatorError::NotSigner(caller));
        }
        if self.ledger.round(round_id)?.executed {
            return Err(LedgerError::AlreadyExecuted(round_id).into());
        }
        let confirmations = self.ledger.record_confirmation(round_id, caller)?;
        self.metrics.confirmations_recorded.increment(1);
        let threshold = self.registry.threshold().get();
        if confirmations >= threshold {
            tracing::info!(target: "quorum::coordinator", round_id, confirmations, threshold, "round reached quorum");
        } else {
            tracing::debug!(target: "quorum::coordinator", round_id, confirmations, threshold, signer = %caller, "confirmation recorded");
        }
        Ok(())
    }

    async fn execute_round(
        &mut self,
        round_id: RoundId,
        payload: Bytes,
        timeout: Duration,
    ) -> Result<(), CoordinatorError> {
        let (confirmations, executed) = {
            let round = self.ledger.round(round_id)?;
            (round.confirmations(), round.executed)
        };
        if executed {
            return Err(LedgerError::AlreadyExecuted(round_id).into());
        }
        // The threshold is read live at execution time, not snapshotted at
        // initiation.
        let threshold = self.registry.threshold().get();
        if confirmations < threshold {
            return Err(CoordinatorError::InsufficientConfirmations {
                round_id,
                confirmations,
                threshold,
            });
        }
        let update = PriceUpdate::decode(&payload)?;

        let started = Instant::now();
        let result =
            tokio::time::timeout(timeout, self.store.update_records(self.price_oracle_address, &update))
                .await;
        self.metrics.store_call_duration.record(started.elapsed().as_secs_f64());
        match result {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                self.metrics.failed_executions.increment(1);
                tracing::warn!(target: "quorum::coordinator", round_id, %err, "price store rejected the update");
                return Err(err.into());
            }
            Err(_) => {
                self.metrics.failed_executions.increment(1);
                tracing::warn!(target: "quorum::coordinator", round_id, ?timeout, "price store call timed out");
                return Err(CoordinatorError::PriceStoreTimeout(timeout));
            }
        }

        // The round is marked executed only once the store has confirmed
        // success; `executed` and `ended_at` are set together.
        let ended_at = unix_timestamp();
        self.ledger.mark_executed(round_id, ended_at)?;
        self.metrics.rounds_executed.increment(1);
        tracing::info!(target: "quorum::coordinator", round_id, records = update.len(), "round executed");
        self.notify(CoordinatorEvent::RoundExecuted { round_id, ended_at }).await;
        Ok(())
    }

    fn add_signer(&mut self, caller: Address, signer: Address) -> Result<(), CoordinatorError> {
        self.authority.require_admin(caller)?;
        self.registry.add(signer)?;
        tracing::info!(target: "quorum::coordinator", %signer, "signer added");
        Ok(())
    }

    fn remove_signer(&mut self, caller: Address, signer: Address) -> Result<(), CoordinatorError> {
        self.authority.require_admin(caller)?;
        self.registry.remove(&signer)?;
        tracing::info!(target: "quorum::coordinator", %signer, "signer removed");
        Ok(())
    }

    fn set_threshold(
        &mut self,
        caller: Address,
        threshold: NonZeroU64,
    ) -> Result<(), CoordinatorError> {
        self.authority.require_admin(caller)?;
        self.registry.set_threshold(threshold);
        tracing::info!(target: "quorum::coordinator", threshold = threshold.get(), "threshold updated");
        Ok(())
    }

    fn set_admin(&mut self, caller: Address, new_admin: Address) -> Result<(), CoordinatorError> {
        self.authority.require_admin(caller)?;
        self.authority.set_admin(new_admin);
        tracing::info!(target: "quorum::coordinator", admin = %new_admin, "admin replaced");
        Ok(())
    }

    fn set_price_oracle_address(
        &mut self,
        caller: Address,
        address: Address,
    ) -> Result<(), CoordinatorError> {
        self.authority.require_admin(caller)?;
        self.price_oracle_address = address;
        tracing::info!(target: "quorum::coordinator", oracle = %address, "price oracle address updated");
        Ok(())
    }

    async fn notify(&self, event: CoordinatorEvent) {
        if self.events.send(Arc::new(event)).await.is_err() {
            tracing::trace!(target: "quorum::coordinator", "event channel closed - dropping event");
        }
    }
}

impl<PS> Debug for UpdateCoordinator<PS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateCoordinator")
            .field("authority", &self.authority)
            .field("registry", &self.registry)
            .field("ledger", &self.ledger)
            .field("store", &"PriceStore")
            .field("price_oracle_address", &self.price_oracle_address)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use quorum_governance::GovernanceError;
    use quorum_providers::test_utils::MockPriceStore;

    const ADMIN: Address = address!("00000000000000000000000000000000000000aa");
    const ALICE: Address = address!("0000000000000000000000000000000000000001");
    const BOB: Address = address!("0000000000000000000000000000000000000002");
    const ORACLE: Address = address!("00000000000000000000000000000000000000ff");

    fn config() -> CoordinatorConfig {
        CoordinatorConfig::new(ADMIN, vec![ALICE, BOB], NonZeroU64::new(2).unwrap(), ORACLE)
    }

    #[test]
    fn test_should_reject_config_below_threshold() {
        let config =
            CoordinatorConfig::new(ADMIN, vec![ALICE], NonZeroU64::new(2).unwrap(), ORACLE);
        let err = UpdateCoordinator::new(config, MockPriceStore::new()).unwrap_err();
        assert!(matches!(
            err,
            CoordinatorError::Governance(GovernanceError::BelowThreshold {
                members: 1,
                threshold: 2
            })
        ));
    }

    #[tokio::test]
    async fn test_should_shut_down_when_handles_drop() {
        let (coordinator, handle, _events) =
            UpdateCoordinator::new(config(), MockPriceStore::new()).unwrap();
        let task = tokio::spawn(coordinator.run());

        handle.initiate_update(Bytes::from_static(b"payload")).await.unwrap();
        drop(handle);

        task.await.expect("coordinator task panicked");
    }

    #[tokio::test]
    async fn test_should_fail_commands_after_shutdown() {
        let (coordinator, handle, _events) =
            UpdateCoordinator::new(config(), MockPriceStore::new()).unwrap();
        drop(coordinator);

        let err = handle.initiate_update(Bytes::new()).await.unwrap_err();
        assert!(matches!(err, CoordinatorError::CommandChannelClosed));
    }
}
