//! Requirer side of the `fiveg_core_gnb` interface.

use gnbint_common::{log_relation_data, Direction, GnbName, PlmnConfig, Tac};
use tracing::warn;

use super::{PublishError, GNB_NAME_KEY, PLMNS_KEY, TAC_KEY};
use crate::model::{CharmHost, DataBag, Relation, RelationId};

/// Reads the core network's published TAC and PLMNs and publishes the gNB
/// name back.
///
/// Reads look at the first instance of the relation; the core publishes the
/// same values on every instance.
#[derive(Debug, Clone, Copy)]
pub struct CoreGnbRequirer<'a> {
    relation_name: &'a str,
}

impl<'a> CoreGnbRequirer<'a> {
    pub fn new(relation_name: &'a str) -> Self {
        Self { relation_name }
    }

    pub fn relation_name(&self) -> &'a str {
        self.relation_name
    }

    fn first_relation<'h, H: CharmHost>(&self, host: &'h H) -> Option<&'h Relation> {
        host.relations(self.relation_name).into_iter().next()
    }

    /// Returns the TAC published by the core, if any.
    ///
    /// A value that is not a decimal integer within 24 bits is treated as
    /// absent.
    pub fn remote_tac<H: CharmHost>(&self, host: &H) -> Option<Tac> {
        let relation = self.first_relation(host)?;
        let raw = relation.remote_app_data().get(TAC_KEY)?;
        match raw.trim().parse::<u32>().ok().and_then(Tac::new) {
            Some(tac) => Some(tac),
            None => {
                warn!(
                    "Ignoring malformed TAC {:?} published on relation {}",
                    raw,
                    relation.id()
                );
                None
            }
        }
    }

    /// Returns the PLMN list published by the core; empty if absent or
    /// malformed.
    pub fn remote_plmns<H: CharmHost>(&self, host: &H) -> Vec<PlmnConfig> {
        let Some(relation) = self.first_relation(host) else {
            return Vec::new();
        };
        log_relation_data(
            self.relation_name,
            relation.id(),
            Direction::Rx,
            relation.remote_app_data(),
        );
        let Some(raw) = relation.remote_app_data().get(PLMNS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<PlmnConfig>>(raw) {
            Ok(plmns) => plmns,
            Err(e) => {
                warn!(
                    "Ignoring malformed PLMNs published on relation {}: {}",
                    relation.id(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Returns true if this application's bag on the first relation
    /// instance carries the gNB name.
    pub fn is_gnb_name_published<H: CharmHost>(&self, host: &H) -> bool {
        self.first_relation(host)
            .is_some_and(|r| r.local_app_data().contains_key(GNB_NAME_KEY))
    }

    /// Publishes the gNB name into this application's bag of `relation_id`.
    pub fn publish_gnb_information<H: CharmHost>(
        &self,
        host: &mut H,
        relation_id: RelationId,
        gnb_name: &GnbName,
    ) -> Result<(), PublishError> {
        if !gnb_name.has_value() {
            return Err(PublishError::InvalidData("gNB name is empty".to_string()));
        }

        let mut bag = DataBag::new();
        bag.insert(GNB_NAME_KEY.to_string(), gnb_name.to_string());
        log_relation_data(self.relation_name, relation_id, Direction::Tx, &bag);
        host.update_local_app_data(relation_id, bag)?;
        Ok(())
    }
}
