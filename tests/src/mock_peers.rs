//! Mock relation peers
//!
//! `MockCore` plays the core network side of `fiveg_core_gnb`, publishing a
//! TAC and PLMN list. `MockGnbSimulator` plays the RAN simulator side of
//! `fiveg_gnb_identity`, relating and reading back the published identity.

use gnbint_charm::{
    CharmHost, HostError, ModelState, Relation, RelationId, GNB_NAME_KEY, PLMNS_KEY, TAC_KEY,
};
use gnbint_common::{PlmnConfig, CORE_GNB_RELATION_NAME, GNB_IDENTITY_RELATION_NAME};

/// Mock core network peer
#[derive(Debug, Clone, Default)]
pub struct MockCore {
    /// TAC to publish, if any
    pub tac: Option<u32>,
    /// PLMNs to publish, if any
    pub plmns: Option<Vec<PlmnConfig>>,
}

impl MockCore {
    pub fn new(tac: u32, plmns: Vec<PlmnConfig>) -> Self {
        Self {
            tac: Some(tac),
            plmns: Some(plmns),
        }
    }

    /// Relate to the integrator and publish; returns the relation id
    pub fn relate(&self, model: &mut ModelState) -> Result<RelationId, HostError> {
        let id = model.add_relation(
            Relation::new(model.next_relation_id(), CORE_GNB_RELATION_NAME)
                .with_remote_app("sdcore-nms-k8s"),
        );
        self.publish(model, id)?;
        Ok(id)
    }

    /// Write the configured values into the core's bag
    pub fn publish(&self, model: &mut ModelState, relation_id: RelationId) -> Result<(), HostError> {
        if let Some(tac) = self.tac {
            model.set_remote_data(relation_id, TAC_KEY, tac.to_string())?;
        }
        if let Some(plmns) = &self.plmns {
            let encoded = serde_json::to_string(plmns).unwrap_or_else(|_| "[]".to_string());
            model.set_remote_data(relation_id, PLMNS_KEY, encoded)?;
        }
        Ok(())
    }
}

/// Mock RAN simulator peer
#[derive(Debug, Clone)]
pub struct MockGnbSimulator {
    /// Remote application name
    pub app_name: String,
}

impl Default for MockGnbSimulator {
    fn default() -> Self {
        Self {
            app_name: "gnb_identity_requirer_app".to_string(),
        }
    }
}

impl MockGnbSimulator {
    /// Relate to the integrator; returns the relation id
    pub fn relate(&self, model: &mut ModelState) -> RelationId {
        model.add_relation(
            Relation::new(model.next_relation_id(), GNB_IDENTITY_RELATION_NAME)
                .with_remote_app(self.app_name.clone()),
        )
    }

    /// Read the published identity as (gNB name, TAC)
    pub fn identity(&self, model: &ModelState, relation_id: RelationId) -> Option<(String, u32)> {
        let bag = model.relation(relation_id)?.local_app_data();
        let name = bag.get(GNB_NAME_KEY)?.clone();
        let tac = bag.get(TAC_KEY)?.parse().ok()?;
        Some((name, tac))
    }
}
