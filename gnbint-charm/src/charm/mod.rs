//! gNB Integrator Core
//!
//! This module implements the reactive core of the integrator:
//! - Status resolution from relation and configuration state
//! - Reconciliation of published relation data
//! - The event task that drives both, one host event at a time
//! - Configuration and host snapshot loading
//!
//! # Architecture
//!
//! Every inbound event is handled to completion against the current host
//! state. Nothing is cached between events; the reconciler and the status
//! resolver recompute everything they need each time.

mod config_loader;
mod reconciler;
mod status;
mod task;

pub use config_loader::{
    load_and_validate_integrator_config, load_integrator_config, load_integrator_config_from_str,
    load_model_state, load_model_state_from_str, validate_integrator_config, ConfigError,
    ConfigValidationError,
};

pub use reconciler::{configured_tac, CharmError, ReconcileOutcome, Reconciler, Trigger};

pub use status::{
    invalid_config_message, relation_missing_message, resolve_status, RelationReport,
    StatusInputs, StatusReport, StatusResolver, GNB_NAME_MISSING, WAITING_FOR_CORE_CONFIG,
};

pub use task::CharmTask;
