use crate::{COMMAND_CHANNEL_SIZE, EVENT_CHANNEL_SIZE};
use alloy_primitives::Address;
use std::num::NonZeroU64;

/// The configuration for the update coordinator.
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    /// The initial admin identity.
    pub admin: Address,
    /// The initial signer set.
    pub signers: Vec<Address>,
    /// The number of confirmations required to execute a round.
    pub threshold: NonZeroU64,
    /// The address of the downstream price storage contract.
    pub price_oracle_address: Address,
    /// The capacity of the command channel.
    pub command_channel_size: usize,
    /// The capacity of the event channel.
    pub event_channel_size: usize,
}

impl CoordinatorConfig {
    /// Returns a configuration with default channel capacities.
    pub fn new(
        admin: Address,
        signers: Vec<Address>,
        threshold: NonZeroU64,
        price_oracle_address: Address,
    ) -> Self {
        Self {
            admin,
            signers,
            threshold,
            price_oracle_address,
            command_channel_size: COMMAND_CHANNEL_SIZE,
            event_channel_size: EVENT_CHANNEL_SIZE,
        }
    }
}
