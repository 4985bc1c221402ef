//! Relation Interfaces
//!
//! Typed access to the two relation interfaces the integrator speaks:
//!
//! - `fiveg_core_gnb` (requirer side): the core publishes `tac` and `plmns`,
//!   the integrator publishes `gnb-name`.
//! - `fiveg_gnb_identity` (provider side): the integrator publishes
//!   `gnb-name` and `tac` for the RAN simulator.
//!
//! Both sides validate what they publish before it reaches the host.

mod core_gnb;
mod gnb_identity;

use thiserror::Error;

use crate::model::HostError;

pub use core_gnb::CoreGnbRequirer;
pub use gnb_identity::GnbIdentityProvider;

/// Data bag key carrying the gNB name.
pub const GNB_NAME_KEY: &str = "gnb-name";

/// Data bag key carrying the TAC.
pub const TAC_KEY: &str = "tac";

/// Data bag key carrying the JSON-encoded PLMN list.
pub const PLMNS_KEY: &str = "plmns";

/// Errors that can occur while publishing relation data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PublishError {
    /// The data does not satisfy the interface schema
    #[error("Invalid relation data: {0}")]
    InvalidData(String),

    /// The host refused the write
    #[error(transparent)]
    Host(#[from] HostError),
}
