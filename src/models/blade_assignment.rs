use serde::{Deserialize, Serialize};

use super::required;
use crate::persistence::PersistableModel;

/// Planned blade allocation for a machine.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, sqlx::FromRow)]
pub struct BladeAssignment {
    pub machine_id: String,

    pub blade_type: Option<String>,
    pub count: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct BladeAssignmentUpdate {
    pub machine_id: Option<String>,

    pub blade_type: Option<String>,
    #[serde(default, deserialize_with = "super::count")]
    pub count: Option<i32>,
}

impl PersistableModel<BladeAssignmentUpdate> for BladeAssignment {
    fn new(update: &BladeAssignmentUpdate) -> anyhow::Result<Self> {
        Ok(Self {
            machine_id: required(&update.machine_id, "machine_id")?,
            blade_type: update.blade_type.clone(),
            count: update.count,
        })
    }

    fn get_id(&self) -> String {
        self.machine_id.clone()
    }
}
