//! Unit Status Resolution and Reporting
//!
//! The resolver turns the current host state into exactly one
//! [`UnitStatus`]. Checks are ordered and stop at the first unmet
//! precondition, so when several things are wrong the operator sees the
//! most fundamental one.
//!
//! `core-gnb` mode:
//!
//! 1. relation missing → Blocked
//! 2. core TAC missing or zero, or PLMNs missing → Waiting
//! 3. gNB name not yet in our own bag → Blocked
//! 4. otherwise Active, showing the PLMNs and TAC
//!
//! `gnb-identity` mode only checks the local configuration.

use gnbint_common::{
    format_plmns, IntegratorConfig, PlmnConfig, RelationMode, Tac, UnitStatus, TAC_CONFIG_KEY,
};
use serde::{Deserialize, Serialize};

use super::reconciler::configured_tac;
use crate::interfaces::CoreGnbRequirer;
use crate::model::{CharmHost, DataBag, RelationId};

/// Status message while the core has not published its configuration.
pub const WAITING_FOR_CORE_CONFIG: &str = "Waiting for TAC and PLMNs configuration";

/// Status message when the leader has not published the gNB name yet.
pub const GNB_NAME_MISSING: &str = "Invalid configuration: gNB name is missing from the relation";

/// Blocked message for a relation that was never created.
pub fn relation_missing_message(relation_name: &str) -> String {
    format!("Waiting for {relation_name} relation to be created")
}

/// Blocked message listing invalid configuration options.
pub fn invalid_config_message(keys: &[&str]) -> String {
    let quoted = keys
        .iter()
        .map(|k| format!("'{k}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("The following configurations are not valid: [{quoted}]")
}

/// Everything status resolution looks at, gathered from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusInputs {
    /// Inputs in `core-gnb` mode
    CoreGnb {
        relation_name: String,
        relation_created: bool,
        peer_tac: Option<Tac>,
        peer_plmns: Vec<PlmnConfig>,
        gnb_name_published: bool,
    },
    /// Inputs in `gnb-identity` mode
    GnbIdentity {
        invalid_configs: Vec<&'static str>,
    },
}

/// Computes the unit status from gathered inputs.
pub fn resolve_status(inputs: &StatusInputs) -> UnitStatus {
    match inputs {
        StatusInputs::CoreGnb {
            relation_name,
            relation_created,
            peer_tac,
            peer_plmns,
            gnb_name_published,
        } => {
            if !relation_created {
                return UnitStatus::blocked(relation_missing_message(relation_name));
            }
            // A zero TAC is the core's unset value.
            let Some(tac) = peer_tac.filter(|t| t.value() != 0) else {
                return UnitStatus::waiting(WAITING_FOR_CORE_CONFIG);
            };
            if peer_plmns.is_empty() {
                return UnitStatus::waiting(WAITING_FOR_CORE_CONFIG);
            }
            if !gnb_name_published {
                return UnitStatus::blocked(GNB_NAME_MISSING);
            }
            UnitStatus::active(format!("PLMNs: {}, TAC: {}", format_plmns(peer_plmns), tac))
        }
        StatusInputs::GnbIdentity { invalid_configs } => {
            if invalid_configs.is_empty() {
                UnitStatus::active("")
            } else {
                UnitStatus::blocked(invalid_config_message(invalid_configs))
            }
        }
    }
}

/// Gathers status inputs from the host and resolves them.
#[derive(Debug, Clone, Copy)]
pub struct StatusResolver<'a> {
    config: &'a IntegratorConfig,
}

impl<'a> StatusResolver<'a> {
    pub fn new(config: &'a IntegratorConfig) -> Self {
        Self { config }
    }

    /// Reads the inputs relevant to the configured mode.
    pub fn gather<H: CharmHost>(&self, host: &H) -> StatusInputs {
        match self.config.mode {
            RelationMode::CoreGnb => {
                let relation_name = self.config.relation_name();
                let requirer = CoreGnbRequirer::new(relation_name);
                StatusInputs::CoreGnb {
                    relation_name: relation_name.to_string(),
                    relation_created: !host.relations(relation_name).is_empty(),
                    peer_tac: requirer.remote_tac(host),
                    peer_plmns: requirer.remote_plmns(host),
                    gnb_name_published: requirer.is_gnb_name_published(host),
                }
            }
            RelationMode::GnbIdentity => {
                let mut invalid_configs = Vec::new();
                if configured_tac(host, self.config.tac_policy()).is_err() {
                    invalid_configs.push(TAC_CONFIG_KEY);
                }
                StatusInputs::GnbIdentity { invalid_configs }
            }
        }
    }

    /// Resolves the unit status for the current host state.
    pub fn collect<H: CharmHost>(&self, host: &H) -> UnitStatus {
        resolve_status(&self.gather(host))
    }
}

/// Local data bag of one relation instance, for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationReport {
    pub id: RelationId,
    pub name: String,
    #[serde(rename = "local-app-data")]
    pub local_app_data: DataBag,
}

/// Snapshot of what the integrator currently shows and publishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    #[serde(rename = "unit-status")]
    pub unit_status: UnitStatus,
    #[serde(rename = "is-leader")]
    pub is_leader: bool,
    pub relations: Vec<RelationReport>,
}

impl StatusReport {
    /// Builds a report for the governing relation of `config`.
    pub fn from_host<H: CharmHost>(config: &IntegratorConfig, host: &H) -> Self {
        let relations = host
            .relations(config.relation_name())
            .into_iter()
            .map(|r| RelationReport {
                id: r.id(),
                name: r.name().to_string(),
                local_app_data: r.local_app_data().clone(),
            })
            .collect();

        Self {
            unit_status: host.unit_status().clone(),
            is_leader: host.is_leader(),
            relations,
        }
    }

    /// Returns the report as a YAML string.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Returns the report as a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
