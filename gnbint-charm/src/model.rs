//! Host Model
//!
//! The integrator never talks to its host directly; it sees the deployment
//! through the [`CharmHost`] trait: the model and application names, the
//! leadership flag, configuration options and the relations with their data
//! bags. [`ModelState`] is the in-memory implementation used by the
//! `gnb-integrator` binary (loaded from a YAML snapshot) and by tests.
//!
//! Each relation carries two namespaces. The local application bag is
//! written only through [`CharmHost::update_local_app_data`], which the host
//! refuses for non-leader units. The remote application bag belongs to the
//! peer and has no mutating method on the charm-facing trait.

use std::collections::BTreeMap;

use gnbint_common::UnitStatus;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Relation identifier assigned by the host.
pub type RelationId = u32;

/// Application-scoped key/value data of one side of a relation.
pub type DataBag = BTreeMap<String, String>;

/// Errors raised by the host when the charm asks for something impossible.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// No relation with this id exists
    #[error("Unknown relation id {0}")]
    UnknownRelation(RelationId),

    /// Application data may only be written by the leader unit
    #[error("Unit is not leader: cannot write application data of relation {0}")]
    NotLeader(RelationId),
}

/// One established relation instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    id: RelationId,
    name: String,
    #[serde(default)]
    remote_app: Option<String>,
    #[serde(default)]
    local_app_data: DataBag,
    #[serde(default)]
    remote_app_data: DataBag,
}

impl Relation {
    /// Creates an empty relation instance.
    pub fn new(id: RelationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            remote_app: None,
            local_app_data: DataBag::new(),
            remote_app_data: DataBag::new(),
        }
    }

    /// Sets the remote application name.
    pub fn with_remote_app(mut self, app: impl Into<String>) -> Self {
        self.remote_app = Some(app.into());
        self
    }

    /// Seeds a key in the remote application bag.
    pub fn with_remote_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.remote_app_data.insert(key.into(), value.into());
        self
    }

    /// Seeds a key in the local application bag.
    pub fn with_local_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.local_app_data.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> RelationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn remote_app(&self) -> Option<&str> {
        self.remote_app.as_deref()
    }

    /// This application's namespace.
    pub fn local_app_data(&self) -> &DataBag {
        &self.local_app_data
    }

    /// The peer application's namespace.
    pub fn remote_app_data(&self) -> &DataBag {
        &self.remote_app_data
    }
}

/// Everything the integrator may read from, or ask of, its host.
pub trait CharmHost {
    /// Name of the deployment scope (model).
    fn model_name(&self) -> &str;

    /// Name of this application.
    fn app_name(&self) -> &str;

    /// Whether this unit is the application leader.
    fn is_leader(&self) -> bool;

    /// Returns a configuration option, if set.
    fn config_get(&self, key: &str) -> Option<&str>;

    /// Returns all instances of the named relation, in id order.
    fn relations(&self, name: &str) -> Vec<&Relation>;

    /// Returns a relation instance by id.
    fn relation(&self, id: RelationId) -> Option<&Relation>;

    /// Merges `data` into this application's bag of relation `id`.
    fn update_local_app_data(&mut self, id: RelationId, data: DataBag) -> Result<(), HostError>;

    /// Returns the current unit status.
    fn unit_status(&self) -> &UnitStatus;

    /// Sets the unit status.
    fn set_unit_status(&mut self, status: UnitStatus);
}

/// In-memory host model.
///
/// The YAML snapshot form is:
///
/// ```yaml
/// model_name: my-model
/// app_name: sdcore-gnb-integrator
/// leader: true
/// config:
///   tac: "012"
/// relations:
///   - id: 0
///     name: fiveg_gnb_identity
///     remote_app: gnbsim
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelState {
    model_name: String,
    app_name: String,
    #[serde(default)]
    leader: bool,
    #[serde(default)]
    config: BTreeMap<String, String>,
    #[serde(default)]
    relations: Vec<Relation>,
    #[serde(default)]
    unit_status: UnitStatus,
}

impl ModelState {
    /// Creates a model with no relations, no configuration and no leadership.
    pub fn new(model_name: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            app_name: app_name.into(),
            leader: false,
            config: BTreeMap::new(),
            relations: Vec::new(),
            unit_status: UnitStatus::Unknown,
        }
    }

    /// Sets the leadership flag.
    pub fn set_leader(&mut self, leader: bool) {
        self.leader = leader;
    }

    /// Sets a configuration option.
    pub fn set_config(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.config.insert(key.into(), value.into());
    }

    /// Removes a configuration option.
    pub fn unset_config(&mut self, key: &str) {
        self.config.remove(key);
    }

    /// Adds a relation instance, replacing any existing one with the same id.
    pub fn add_relation(&mut self, relation: Relation) -> RelationId {
        let id = relation.id;
        self.relations.retain(|r| r.id != id);
        self.relations.push(relation);
        self.relations.sort_by_key(|r| r.id);
        id
    }

    /// Removes a relation instance.
    pub fn remove_relation(&mut self, id: RelationId) -> Option<Relation> {
        let index = self.relations.iter().position(|r| r.id == id)?;
        Some(self.relations.remove(index))
    }

    /// Returns the next unused relation id.
    pub fn next_relation_id(&self) -> RelationId {
        self.relations.iter().map(|r| r.id + 1).max().unwrap_or(0)
    }

    /// Writes a key into the peer's bag, as the peer application would.
    pub fn set_remote_data(
        &mut self,
        id: RelationId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), HostError> {
        let relation = self.relation_mut(id)?;
        relation.remote_app_data.insert(key.into(), value.into());
        Ok(())
    }

    /// Returns all relation instances.
    pub fn all_relations(&self) -> &[Relation] {
        &self.relations
    }

    fn relation_mut(&mut self, id: RelationId) -> Result<&mut Relation, HostError> {
        self.relations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(HostError::UnknownRelation(id))
    }
}

impl CharmHost for ModelState {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn app_name(&self) -> &str {
        &self.app_name
    }

    fn is_leader(&self) -> bool {
        self.leader
    }

    fn config_get(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(String::as_str)
    }

    fn relations(&self, name: &str) -> Vec<&Relation> {
        self.relations.iter().filter(|r| r.name == name).collect()
    }

    fn relation(&self, id: RelationId) -> Option<&Relation> {
        self.relations.iter().find(|r| r.id == id)
    }

    fn update_local_app_data(&mut self, id: RelationId, data: DataBag) -> Result<(), HostError> {
        if !self.leader {
            return Err(HostError::NotLeader(id));
        }
        let relation = self.relation_mut(id)?;
        relation.local_app_data.extend(data);
        Ok(())
    }

    fn unit_status(&self) -> &UnitStatus {
        &self.unit_status
    }

    fn set_unit_status(&mut self, status: UnitStatus) {
        self.unit_status = status;
    }
}
