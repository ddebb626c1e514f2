use serde::{de, Deserialize, Deserializer};

mod blade_assignment;
mod inventory;
mod log;
mod machine_blade;
mod machine_status;
mod snapshot;

pub use blade_assignment::{BladeAssignment, BladeAssignmentUpdate};
pub use inventory::{InventoryItem, InventoryUpdate};
pub use log::{LogEntry, NewLogEntry};
pub use machine_blade::{MachineBlade, MachineBladeUpdate};
pub use machine_status::{MachineStatus, MachineStatusUpdate};
pub use snapshot::DataSnapshot;

/// Reads an optional integer count. Numeric strings are accepted the way Postgres
/// coerces a text literal into an INTEGER column.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(i32),
        Text(String),
    }

    match Option::<Count>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Count::Number(count)) => Ok(Some(count)),
        Some(Count::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid integer count {text:?}"))),
    }
}

/// Mirrors the NOT NULL rejection Postgres applies to key columns.
pub(crate) fn required(value: &Option<String>, column: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value.clone()),
        None => Err(anyhow::anyhow!(
            "null value in column \"{column}\" violates not-null constraint"
        )),
    }
}
