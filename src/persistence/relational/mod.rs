mod blade_assignment;
mod inventory;
mod log;
mod machine_blade;
mod machine_status;

pub use blade_assignment::BladeAssignmentRelationalPersistence;
pub use inventory::InventoryRelationalPersistence;
pub use log::LogRelationalPersistence;
pub use machine_blade::MachineBladeRelationalPersistence;
pub use machine_status::MachineStatusRelationalPersistence;
