//! Common types and utilities for the gNB integrator
//!
//! This crate provides the domain types (TAC, gNB name, PLMN configuration,
//! unit status), the integrator configuration and logging setup shared by
//! the integrator crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{
    IntegratorConfig, RelationMode, TacPolicy, CORE_GNB_RELATION_NAME,
    GNB_IDENTITY_RELATION_NAME, TAC_CONFIG_KEY,
};
pub use error::InvalidTac;
pub use logging::{
    init_logging, init_logging_with_filter, log_relation_data, BagDump, Direction, LogLevel,
};
pub use types::*;
