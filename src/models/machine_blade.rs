use serde::{Deserialize, Serialize};

use super::required;
use crate::persistence::PersistableModel;

/// The blade type currently fitted to a machine.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, sqlx::FromRow)]
pub struct MachineBlade {
    pub machine_id: String,
    pub blade_type: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MachineBladeUpdate {
    pub machine_id: Option<String>,
    pub blade_type: Option<String>,
}

impl PersistableModel<MachineBladeUpdate> for MachineBlade {
    fn new(update: &MachineBladeUpdate) -> anyhow::Result<Self> {
        Ok(Self {
            machine_id: required(&update.machine_id, "machine_id")?,
            blade_type: update.blade_type.clone(),
        })
    }

    fn get_id(&self) -> String {
        self.machine_id.clone()
    }
}
