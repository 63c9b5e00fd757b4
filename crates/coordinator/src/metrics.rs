use metrics::{Counter, Histogram};
use metrics_derive::Metrics;

/// The metrics for the [`crate::UpdateCoordinator`].
#[derive(Metrics, Clone)]
#[metrics(scope = "coordinator")]
pub struct CoordinatorMetrics {
    /// The number of rounds initiated.
    pub rounds_initiated: Counter,
    /// The number of confirmations recorded.
    pub confirmations_recorded: Counter,
    /// The number of rounds executed.
    pub rounds_executed: Counter,
    /// The number of execution attempts that failed at the price store.
    pub failed_executions: Counter,
    /// The duration of price store calls.
    pub store_call_duration: Histogram,
}

/// The metrics for the [`crate::CoordinatorHandle`].
#[derive(Metrics, Clone)]
#[metrics(scope = "coordinator.handle")]
pub struct HandleMetrics {
    /// The number of commands that could not be sent to the coordinator.
    pub failed_command_sends: Counter,
}
