use serde::{Deserialize, Serialize};

use super::required;

/// Stock counts for one blade type within one group of machines.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, sqlx::FromRow)]
pub struct InventoryItem {
    pub group_name: String,
    pub blade_type: String,

    pub fixed: Option<i32>,
    pub available: Option<i32>,
}

/// Body of an inventory write. Fields are passed to storage as-is, absent ones as NULL.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct InventoryUpdate {
    pub group_name: Option<String>,
    pub blade_type: Option<String>,

    #[serde(default, deserialize_with = "super::count")]
    pub fixed: Option<i32>,
    #[serde(default, deserialize_with = "super::count")]
    pub available: Option<i32>,
}

impl InventoryItem {
    pub fn try_from_update(update: &InventoryUpdate) -> anyhow::Result<Self> {
        Ok(Self {
            group_name: required(&update.group_name, "group_name")?,
            blade_type: required(&update.blade_type, "blade_type")?,
            fixed: update.fixed,
            available: update.available,
        })
    }

    pub fn key(&self) -> (String, String) {
        (self.group_name.clone(), self.blade_type.clone())
    }
}
