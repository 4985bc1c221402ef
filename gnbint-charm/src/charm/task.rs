//! Integrator Event Task
//!
//! Drains host events from its channel one at a time. Every event except
//! status collection is first offered to the reconciler; afterwards the
//! unit status is recomputed from scratch, the way a host evaluates status
//! at the end of each hook.

use async_trait::async_trait;
use gnbint_common::{IntegratorConfig, UnitStatus};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use super::reconciler::{CharmError, ReconcileOutcome, Reconciler, Trigger};
use super::status::StatusResolver;
use crate::model::CharmHost;
use crate::tasks::{CharmEvent, Task, TaskMessage, TaskState};

/// gNB integrator event task.
pub struct CharmTask<H> {
    config: IntegratorConfig,
    host: H,
    state: TaskState,
    events_handled: u64,
}

impl<H: CharmHost> CharmTask<H> {
    /// Creates a new task over the given host.
    pub fn new(config: IntegratorConfig, host: H) -> Self {
        Self {
            config,
            host,
            state: TaskState::Created,
            events_handled: 0,
        }
    }

    pub fn config(&self) -> &IntegratorConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, for simulating peer or operator changes
    /// between events.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the task and returns the host.
    pub fn into_host(self) -> H {
        self.host
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Number of events handled so far.
    pub fn events_handled(&self) -> u64 {
        self.events_handled
    }

    /// Handles a single event to completion.
    ///
    /// Returns the reconciliation outcome, or `None` for status collection.
    /// The unit status is refreshed even if reconciliation failed.
    pub fn handle_event(
        &mut self,
        event: CharmEvent,
    ) -> Result<Option<ReconcileOutcome>, CharmError> {
        debug!("Handling event {}", event);
        self.events_handled += 1;

        let result = match Trigger::from_event(event) {
            Some(trigger) => Reconciler::new(&self.config)
                .reconcile(&mut self.host, trigger)
                .map(Some),
            None => Ok(None),
        };

        self.collect_unit_status();
        result
    }

    /// Recomputes and sets the unit status.
    pub fn collect_unit_status(&mut self) -> UnitStatus {
        let status = StatusResolver::new(&self.config).collect(&self.host);
        if &status != self.host.unit_status() {
            info!("Unit status: {}", status);
        }
        self.host.set_unit_status(status.clone());
        status
    }
}

#[async_trait]
impl<H: CharmHost + Send + 'static> Task for CharmTask<H> {
    type Message = CharmEvent;

    async fn run(&mut self, mut rx: mpsc::Receiver<TaskMessage<Self::Message>>) {
        info!("Integrator task started ({} mode)", self.config.mode);
        self.state = TaskState::Running;

        while let Some(msg) = rx.recv().await {
            let Some(event) = msg.into_message() else {
                info!("Integrator task received shutdown signal");
                break;
            };
            match self.handle_event(event) {
                Ok(Some(outcome)) => debug!("{} -> {:?}", event, outcome),
                Ok(None) => {}
                Err(e) => error!("Failed to handle {}: {}", event, e),
            }
        }

        self.state = TaskState::Stopped;
        info!(
            "Integrator task stopped after {} event(s)",
            self.events_handled
        );
    }
}
