use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the stock movement log.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, sqlx::FromRow)]
pub struct LogEntry {
    pub id: i64,

    pub machine_name: Option<String>,
    pub blade_type: Option<String>,
    pub action: Option<String>,
    pub amount: Option<i32>,
    pub person_name: Option<String>,
    pub group_name: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NewLogEntry {
    pub machine_name: Option<String>,
    pub blade_type: Option<String>,
    pub action: Option<String>,
    #[serde(default, deserialize_with = "super::count")]
    pub amount: Option<i32>,
    pub person_name: Option<String>,
    pub group_name: Option<String>,
}

impl LogEntry {
    pub fn new(id: i64, new_entry: &NewLogEntry, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            machine_name: new_entry.machine_name.clone(),
            blade_type: new_entry.blade_type.clone(),
            action: new_entry.action.clone(),
            amount: new_entry.amount,
            person_name: new_entry.person_name.clone(),
            group_name: new_entry.group_name.clone(),
            created_at,
        }
    }
}
