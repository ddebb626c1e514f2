use serde::Serialize;

use super::{BladeAssignment, InventoryItem, LogEntry, MachineBlade, MachineStatus};
use crate::transform::{
    key_blade_assignments, key_machine_blades, key_machine_statuses, nest_inventory,
    AssignmentView, Keyed, Nested, StockCounts,
};

/// Everything the frontend needs in one read.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSnapshot {
    pub inventory: Nested<StockCounts>,
    pub logs: Vec<LogEntry>,
    pub machine_blades: Keyed<Option<String>>,
    pub blade_assignments: Keyed<AssignmentView>,
    pub machine_status: Keyed<Option<String>>,
}

impl DataSnapshot {
    pub fn from_rows(
        inventory: Vec<InventoryItem>,
        logs: Vec<LogEntry>,
        machine_blades: Vec<MachineBlade>,
        blade_assignments: Vec<BladeAssignment>,
        machine_statuses: Vec<MachineStatus>,
    ) -> Self {
        Self {
            inventory: nest_inventory(inventory),
            logs,
            machine_blades: key_machine_blades(machine_blades),
            blade_assignments: key_blade_assignments(blade_assignments),
            machine_status: key_machine_statuses(machine_statuses),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_frontend_field_names() {
        let snapshot = DataSnapshot::from_rows(vec![], vec![], vec![], vec![], vec![]);

        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "inventory": {},
                "logs": [],
                "machineBlades": {},
                "bladeAssignments": {},
                "machineStatus": {},
            })
        );
    }
}
