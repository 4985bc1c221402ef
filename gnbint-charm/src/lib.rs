//! gnbint-charm - gNB Integrator
#![allow(missing_docs)]
//!
//! This crate implements the event-driven core of the gNB integrator. The
//! integrator sits between a 5G core configuration service and a simulated
//! RAN and relays the gNB name, Tracking Area Code and PLMN list across
//! relations:
//!
//! - Status resolution from relation and configuration state
//! - Publication of the gNB identity into relation data bags
//! - A serial event task driving both
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     CharmTask                            │
//! │   event ──► Reconciler ──► interfaces ──► CharmHost      │
//! │                 │                            ▲           │
//! │                 └──► StatusResolver ─────────┘           │
//! └──────────────────────────────────────────────────────────┘
//!          ▲                                   │
//!          │ TaskMessage<CharmEvent>           ▼
//!        host                         data bags, unit status
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use gnbint_charm::{CharmEvent, CharmTask, ModelState};
//! use gnbint_common::{IntegratorConfig, RelationMode};
//!
//! let mut model = ModelState::new("my-model", "gnb-integrator");
//! model.set_leader(true);
//! let mut task = CharmTask::new(IntegratorConfig::new(RelationMode::CoreGnb), model);
//! task.handle_event(CharmEvent::UpdateStatus)?;
//! ```

pub mod charm;
pub mod interfaces;
pub mod model;
pub mod tasks;

// Re-export core module types
pub use charm::{
    configured_tac, invalid_config_message, load_and_validate_integrator_config,
    load_integrator_config, load_integrator_config_from_str, load_model_state,
    load_model_state_from_str, relation_missing_message, resolve_status,
    validate_integrator_config, CharmError, CharmTask, ConfigError, ConfigValidationError,
    ReconcileOutcome, Reconciler, RelationReport, StatusInputs, StatusReport, StatusResolver,
    Trigger, GNB_NAME_MISSING, WAITING_FOR_CORE_CONFIG,
};

// Re-export relation interface types
pub use interfaces::{
    CoreGnbRequirer, GnbIdentityProvider, PublishError, GNB_NAME_KEY, PLMNS_KEY, TAC_KEY,
};

// Re-export host model types
pub use model::{CharmHost, DataBag, HostError, ModelState, Relation, RelationId};

// Re-export task framework types
pub use tasks::{
    CharmEvent, ParseEventError, Task, TaskMessage, TaskState, DEFAULT_CHANNEL_CAPACITY,
};
