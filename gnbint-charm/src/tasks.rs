//! Integrator Task Framework
//!
//! The integrator handles host events one at a time. Events arrive wrapped in
//! a [`TaskMessage`] on a tokio `mpsc` channel and are drained serially by a
//! [`Task`] implementation; nothing in the handling path suspends, so each
//! event runs to completion before the next is received.
//!
//! # Events
//!
//! | Event                   | Text form                 |
//! |-------------------------|---------------------------|
//! | configuration changed   | `config-changed`          |
//! | relation data changed   | `relation-changed:<id>`   |
//! | periodic status tick    | `update-status`           |
//! | status collection       | `collect-unit-status`     |
//! | peer identity request   | `identity-requested:<id>` |

use std::fmt;
use std::str::FromStr;

use tokio::sync::mpsc;

use crate::model::RelationId;

/// Default channel capacity for the event channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

// ============================================================================
// Task Message Envelope
// ============================================================================

/// Task message envelope wrapping typed messages with control signals.
#[derive(Debug)]
pub enum TaskMessage<T> {
    /// Regular message payload
    Message(T),
    /// Shutdown signal - task should terminate gracefully
    Shutdown,
}

impl<T> TaskMessage<T> {
    /// Creates a new message envelope containing the given payload.
    pub fn message(msg: T) -> Self {
        TaskMessage::Message(msg)
    }

    /// Creates a shutdown signal.
    pub fn shutdown() -> Self {
        TaskMessage::Shutdown
    }

    /// Returns the message payload if present, or None for shutdown.
    pub fn into_message(self) -> Option<T> {
        match self {
            TaskMessage::Message(msg) => Some(msg),
            TaskMessage::Shutdown => None,
        }
    }
}

// ============================================================================
// Task Lifecycle State
// ============================================================================

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskState {
    /// Task is created but not yet started
    #[default]
    Created,
    /// Task is running and processing messages
    Running,
    /// Task has stopped gracefully
    Stopped,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskState::Created => write!(f, "Created"),
            TaskState::Running => write!(f, "Running"),
            TaskState::Stopped => write!(f, "Stopped"),
        }
    }
}

// ============================================================================
// Task Trait
// ============================================================================

/// Base trait for integrator tasks.
#[async_trait::async_trait]
pub trait Task: Send + 'static {
    /// The message type this task processes.
    type Message: Send;

    /// Runs the task's main loop, processing messages until shutdown or
    /// until the channel closes.
    async fn run(&mut self, rx: mpsc::Receiver<TaskMessage<Self::Message>>);
}

// ============================================================================
// Events
// ============================================================================

/// Inbound host events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharmEvent {
    /// A configuration option changed
    ConfigChanged,
    /// The peer changed its data on a relation
    RelationChanged(RelationId),
    /// Periodic status tick
    UpdateStatus,
    /// The host asks for the unit status
    CollectUnitStatus,
    /// The peer asked for the gNB identity on a relation
    IdentityRequested(RelationId),
}

/// Error returned when an event cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event: {0:?}")]
pub struct ParseEventError(String);

impl FromStr for CharmEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.trim().split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s.trim(), None),
        };
        let relation_id = || {
            arg.and_then(|a| a.trim().parse::<RelationId>().ok())
                .ok_or_else(|| ParseEventError(s.to_string()))
        };

        match (name, arg) {
            ("config-changed", None) => Ok(CharmEvent::ConfigChanged),
            ("update-status", None) => Ok(CharmEvent::UpdateStatus),
            ("collect-unit-status", None) => Ok(CharmEvent::CollectUnitStatus),
            ("relation-changed", Some(_)) => Ok(CharmEvent::RelationChanged(relation_id()?)),
            ("identity-requested", Some(_)) => Ok(CharmEvent::IdentityRequested(relation_id()?)),
            _ => Err(ParseEventError(s.to_string())),
        }
    }
}

impl fmt::Display for CharmEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharmEvent::ConfigChanged => write!(f, "config-changed"),
            CharmEvent::RelationChanged(id) => write!(f, "relation-changed:{id}"),
            CharmEvent::UpdateStatus => write!(f, "update-status"),
            CharmEvent::CollectUnitStatus => write!(f, "collect-unit-status"),
            CharmEvent::IdentityRequested(id) => write!(f, "identity-requested:{id}"),
        }
    }
}
