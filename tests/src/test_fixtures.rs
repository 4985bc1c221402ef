//! Test fixtures and host model builders
//!
//! Provides pre-configured host models for the integrator scenarios.

use gnbint_charm::{ModelState, Relation, RelationId};
use gnbint_common::TAC_CONFIG_KEY;

/// Model name used by fixtures
pub const TEST_MODEL_NAME: &str = "whatever";

/// Application name used by fixtures
pub const TEST_APP_NAME: &str = "sdcore-gnb-integrator";

/// Builder for a host model
#[derive(Debug, Clone)]
pub struct TestModel {
    model_name: String,
    app_name: String,
    leader: bool,
    tac: Option<String>,
    relations: Vec<Relation>,
}

impl Default for TestModel {
    fn default() -> Self {
        Self {
            model_name: TEST_MODEL_NAME.to_string(),
            app_name: TEST_APP_NAME.to_string(),
            leader: true,
            tac: None,
            relations: Vec::new(),
        }
    }
}

impl TestModel {
    /// Leader unit, no relations, no `tac` option
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model name
    pub fn with_model_name(mut self, name: &str) -> Self {
        self.model_name = name.to_string();
        self
    }

    /// Make this unit a follower
    pub fn not_leader(mut self) -> Self {
        self.leader = false;
        self
    }

    /// Set the `tac` option
    pub fn with_tac(mut self, tac: &str) -> Self {
        self.tac = Some(tac.to_string());
        self
    }

    /// Add a relation instance
    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    /// Add an empty relation instance with the next free id
    pub fn with_empty_relation(self, name: &str) -> Self {
        let id = self.relations.len() as RelationId;
        self.with_relation(Relation::new(id, name))
    }

    /// Build the host model
    pub fn build(self) -> ModelState {
        let mut model = ModelState::new(self.model_name, self.app_name);
        model.set_leader(self.leader);
        if let Some(tac) = self.tac {
            model.set_config(TAC_CONFIG_KEY, tac);
        }
        for relation in self.relations {
            model.add_relation(relation);
        }
        model
    }
}
