//! Integrator configuration
//!
//! The integrator runs in one of two relation modes, selected at
//! construction rather than inferred from the environment:
//!
//! - `gnb-identity`: provides the `fiveg_gnb_identity` relation and
//!   publishes the gNB name together with the TAC taken from its own
//!   configuration.
//! - `core-gnb`: requires the `fiveg_core_gnb` relation, publishes the gNB
//!   name and reads the TAC and PLMN list published by the core network.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Tac;

/// Relation name used in `gnb-identity` mode.
pub const GNB_IDENTITY_RELATION_NAME: &str = "fiveg_gnb_identity";

/// Relation name used in `core-gnb` mode.
pub const CORE_GNB_RELATION_NAME: &str = "fiveg_core_gnb";

/// Configuration option holding the hexadecimal TAC.
pub const TAC_CONFIG_KEY: &str = "tac";

/// Which relation the integrator is built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationMode {
    /// Single provided relation; TAC comes from local configuration.
    GnbIdentity,
    /// Required relation to the core; TAC and PLMNs come from the peer.
    #[default]
    CoreGnb,
}

impl RelationMode {
    /// Returns the relation name this mode governs by default.
    pub fn default_relation_name(&self) -> &'static str {
        match self {
            RelationMode::GnbIdentity => GNB_IDENTITY_RELATION_NAME,
            RelationMode::CoreGnb => CORE_GNB_RELATION_NAME,
        }
    }
}

impl fmt::Display for RelationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationMode::GnbIdentity => write!(f, "gnb-identity"),
            RelationMode::CoreGnb => write!(f, "core-gnb"),
        }
    }
}

/// What an absent `tac` option means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TacPolicy {
    /// Absence maps to the given TAC.
    DefaultTo(Tac),
    /// Absence is an invalid configuration.
    Required,
}

/// gNB integrator configuration.
///
/// Loaded from YAML:
///
/// ```yaml
/// mode: gnb-identity
/// relation_name: fiveg_gnb_identity
/// default_tac: 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegratorConfig {
    /// Relation mode
    #[serde(default)]
    pub mode: RelationMode,
    /// Governing relation name (defaults per mode)
    #[serde(default)]
    pub relation_name: Option<String>,
    /// TAC used when the `tac` option is absent; `null` makes it required
    #[serde(default = "default_tac")]
    pub default_tac: Option<Tac>,
}

fn default_tac() -> Option<Tac> {
    Some(Tac::default())
}

impl IntegratorConfig {
    /// Creates a configuration for the given mode with default settings.
    pub fn new(mode: RelationMode) -> Self {
        Self {
            mode,
            relation_name: None,
            default_tac: default_tac(),
        }
    }

    /// Sets the TAC policy.
    pub fn with_tac_policy(mut self, policy: TacPolicy) -> Self {
        self.default_tac = match policy {
            TacPolicy::DefaultTo(tac) => Some(tac),
            TacPolicy::Required => None,
        };
        self
    }

    /// Overrides the governing relation name.
    pub fn with_relation_name(mut self, name: impl Into<String>) -> Self {
        self.relation_name = Some(name.into());
        self
    }

    /// Returns the governing relation name.
    pub fn relation_name(&self) -> &str {
        self.relation_name
            .as_deref()
            .unwrap_or_else(|| self.mode.default_relation_name())
    }

    /// Returns the TAC policy.
    pub fn tac_policy(&self) -> TacPolicy {
        match self.default_tac {
            Some(tac) => TacPolicy::DefaultTo(tac),
            None => TacPolicy::Required,
        }
    }
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self::new(RelationMode::default())
    }
}
