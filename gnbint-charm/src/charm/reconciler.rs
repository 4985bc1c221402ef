//! Relation Data Reconciliation
//!
//! The reconciler recomputes what this application should publish from the
//! current host state and writes it into every targeted relation instance.
//! It holds no state between events: running it twice against unchanged
//! state publishes the same values twice.
//!
//! Order of checks:
//!
//! 1. Not leader: nothing to do, only the leader writes application data.
//! 2. No instance of the governing relation: nothing to publish to.
//! 3. `gnb-identity` mode only: decode the configured TAC. A config change
//!    with an undecodable TAC blocks the unit; an identity request with one
//!    is dropped silently.
//! 4. Build the gNB name and publish, one write per relation instance.

use gnbint_common::{
    GnbName, IntegratorConfig, InvalidTac, RelationMode, Tac, TacPolicy, UnitStatus,
    TAC_CONFIG_KEY,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::status::invalid_config_message;
use crate::interfaces::{CoreGnbRequirer, GnbIdentityProvider, PublishError};
use crate::model::{CharmHost, HostError, RelationId};
use crate::tasks::CharmEvent;

/// Errors surfaced by the reconciler.
///
/// Configuration and peer-data problems never appear here; they become a
/// unit status or a skipped publication.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CharmError {
    /// The host refused an operation
    #[error("Host error: {0}")]
    Host(#[from] HostError),
}

/// Why reconciliation ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Configuration changed
    ConfigChanged,
    /// The peer requested the gNB identity on one relation instance
    IdentityRequested(RelationId),
    /// The peer changed its data on a relation instance
    RelationChanged(RelationId),
    /// Periodic status tick
    UpdateStatus,
}

impl Trigger {
    /// Maps a host event to a trigger; status collection is not one.
    pub fn from_event(event: CharmEvent) -> Option<Self> {
        match event {
            CharmEvent::ConfigChanged => Some(Trigger::ConfigChanged),
            CharmEvent::IdentityRequested(id) => Some(Trigger::IdentityRequested(id)),
            CharmEvent::RelationChanged(id) => Some(Trigger::RelationChanged(id)),
            CharmEvent::UpdateStatus => Some(Trigger::UpdateStatus),
            CharmEvent::CollectUnitStatus => None,
        }
    }
}

/// What a reconciliation pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The trigger does not drive publication in this mode
    Ignored,
    /// This unit is not the leader
    NotLeader,
    /// No instance of the governing relation exists
    NoRelation,
    /// Publication was dropped without changing the status
    Skipped(String),
    /// Publication was dropped and the unit was blocked
    Blocked(UnitStatus),
    /// Data was published to these relation instances
    Published(Vec<RelationId>),
}

impl ReconcileOutcome {
    /// Returns true if nothing was written.
    pub fn is_noop(&self) -> bool {
        !matches!(self, ReconcileOutcome::Published(_))
    }
}

/// Resolves the configured TAC according to the policy.
///
/// An absent option maps to the policy's default, or to
/// [`InvalidTac::Empty`] when the TAC is required. A present option is
/// always decoded, even if blank.
pub fn configured_tac<H: CharmHost>(host: &H, policy: TacPolicy) -> Result<Tac, InvalidTac> {
    match (host.config_get(TAC_CONFIG_KEY), policy) {
        (Some(raw), _) => Tac::decode(Some(raw)),
        (None, TacPolicy::DefaultTo(tac)) => Ok(tac),
        (None, TacPolicy::Required) => Tac::decode(None),
    }
}

/// Publishes the gNB identity for the configured relation mode.
#[derive(Debug, Clone, Copy)]
pub struct Reconciler<'a> {
    config: &'a IntegratorConfig,
}

impl<'a> Reconciler<'a> {
    pub fn new(config: &'a IntegratorConfig) -> Self {
        Self { config }
    }

    /// Returns true if `trigger` drives publication in this mode.
    pub fn qualifies<H: CharmHost>(&self, host: &H, trigger: Trigger) -> bool {
        match (self.config.mode, trigger) {
            (RelationMode::GnbIdentity, Trigger::ConfigChanged)
            | (RelationMode::GnbIdentity, Trigger::IdentityRequested(_))
            | (RelationMode::CoreGnb, Trigger::UpdateStatus) => true,
            (RelationMode::CoreGnb, Trigger::RelationChanged(id)) => host
                .relation(id)
                .is_some_and(|r| r.name() == self.config.relation_name()),
            _ => false,
        }
    }

    /// Runs one reconciliation pass.
    pub fn reconcile<H: CharmHost>(
        &self,
        host: &mut H,
        trigger: Trigger,
    ) -> Result<ReconcileOutcome, CharmError> {
        if !self.qualifies(host, trigger) {
            debug!("{:?} does not drive publication in {} mode", trigger, self.config.mode);
            return Ok(ReconcileOutcome::Ignored);
        }
        if !host.is_leader() {
            debug!("Not leader, not publishing gNB information");
            return Ok(ReconcileOutcome::NotLeader);
        }

        let relation_name = self.config.relation_name();
        let targets = self.targets(host, trigger);
        if targets.is_empty() {
            info!("No {} relations found.", relation_name);
            return Ok(ReconcileOutcome::NoRelation);
        }

        let gnb_name = GnbName::build(host.model_name(), host.app_name());
        match self.config.mode {
            RelationMode::GnbIdentity => {
                let tac = match configured_tac(host, self.config.tac_policy()) {
                    Ok(tac) => tac,
                    Err(e) => return Ok(self.handle_invalid_tac(host, trigger, e)),
                };
                let provider = GnbIdentityProvider::new(relation_name);
                let mut published = Vec::with_capacity(targets.len());
                for id in targets {
                    match provider.publish_gnb_identity_information(host, id, &gnb_name, tac) {
                        Ok(()) => published.push(id),
                        Err(e) => return Self::absorb(e),
                    }
                }
                info!(
                    "Published gNB identity (name={}, TAC={}) to {} relation(s)",
                    gnb_name,
                    tac,
                    published.len()
                );
                if trigger == Trigger::ConfigChanged {
                    host.set_unit_status(UnitStatus::active(""));
                }
                Ok(ReconcileOutcome::Published(published))
            }
            RelationMode::CoreGnb => {
                let requirer = CoreGnbRequirer::new(relation_name);
                let mut published = Vec::with_capacity(targets.len());
                for id in targets {
                    match requirer.publish_gnb_information(host, id, &gnb_name) {
                        Ok(()) => published.push(id),
                        Err(e) => return Self::absorb(e),
                    }
                }
                info!(
                    "Published gNB name {} to {} relation(s)",
                    gnb_name,
                    published.len()
                );
                Ok(ReconcileOutcome::Published(published))
            }
        }
    }

    /// Relation instances a trigger publishes to.
    fn targets<H: CharmHost>(&self, host: &H, trigger: Trigger) -> Vec<RelationId> {
        let relation_name = self.config.relation_name();
        match trigger {
            Trigger::IdentityRequested(id) => host
                .relation(id)
                .filter(|r| r.name() == relation_name)
                .map(|r| vec![r.id()])
                .unwrap_or_default(),
            _ => host
                .relations(relation_name)
                .iter()
                .map(|r| r.id())
                .collect(),
        }
    }

    fn handle_invalid_tac<H: CharmHost>(
        &self,
        host: &mut H,
        trigger: Trigger,
        error: InvalidTac,
    ) -> ReconcileOutcome {
        match trigger {
            Trigger::ConfigChanged => {
                warn!("Configuration is invalid: {}", error);
                let status = UnitStatus::blocked(invalid_config_message(&[TAC_CONFIG_KEY]));
                host.set_unit_status(status.clone());
                ReconcileOutcome::Blocked(status)
            }
            _ => {
                debug!("Not publishing gNB identity: {}", error);
                ReconcileOutcome::Skipped(error.to_string())
            }
        }
    }

    /// Invalid data is dropped; host refusals are returned.
    fn absorb(error: PublishError) -> Result<ReconcileOutcome, CharmError> {
        match error {
            PublishError::InvalidData(reason) => {
                debug!("Not publishing gNB information: {}", reason);
                Ok(ReconcileOutcome::Skipped(reason))
            }
            PublishError::Host(e) => Err(CharmError::Host(e)),
        }
    }
}
