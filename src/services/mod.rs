mod data;
mod inventory;
mod log;
mod machine;

pub use data::DataService;
pub use inventory::InventoryService;
pub use log::LogService;
pub use machine::MachineService;
