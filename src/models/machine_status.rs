use serde::{Deserialize, Serialize};

use super::required;
use crate::persistence::PersistableModel;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, sqlx::FromRow)]
pub struct MachineStatus {
    pub machine_id: String,
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MachineStatusUpdate {
    pub machine_id: Option<String>,
    pub status: Option<String>,
}

impl PersistableModel<MachineStatusUpdate> for MachineStatus {
    fn new(update: &MachineStatusUpdate) -> anyhow::Result<Self> {
        Ok(Self {
            machine_id: required(&update.machine_id, "machine_id")?,
            status: update.status.clone(),
        })
    }

    fn get_id(&self) -> String {
        self.machine_id.clone()
    }
}
