//! Provider side of the `fiveg_gnb_identity` interface.

use gnbint_common::{log_relation_data, Direction, GnbName, Tac};

use super::{PublishError, GNB_NAME_KEY, TAC_KEY};
use crate::model::{CharmHost, DataBag, RelationId};

/// Publishes the gNB identity (name and TAC) for the RAN simulator.
#[derive(Debug, Clone, Copy)]
pub struct GnbIdentityProvider<'a> {
    relation_name: &'a str,
}

impl<'a> GnbIdentityProvider<'a> {
    pub fn new(relation_name: &'a str) -> Self {
        Self { relation_name }
    }

    pub fn relation_name(&self) -> &'a str {
        self.relation_name
    }

    /// Publishes `gnb-name` and `tac` (decimal) into this application's bag
    /// of `relation_id`.
    pub fn publish_gnb_identity_information<H: CharmHost>(
        &self,
        host: &mut H,
        relation_id: RelationId,
        gnb_name: &GnbName,
        tac: Tac,
    ) -> Result<(), PublishError> {
        if !gnb_name.has_value() {
            return Err(PublishError::InvalidData("gNB name is empty".to_string()));
        }

        let mut bag = DataBag::new();
        bag.insert(GNB_NAME_KEY.to_string(), gnb_name.to_string());
        bag.insert(TAC_KEY.to_string(), tac.to_string());
        log_relation_data(self.relation_name, relation_id, Direction::Tx, &bag);
        host.update_local_app_data(relation_id, bag)?;
        Ok(())
    }
}
